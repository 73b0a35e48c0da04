//! Gavel CLI - interactive chair console
//!
//! Usage:
//!   gavel                                   # Interactive session mode
//!   gavel --timer 90                        # Bare countdown mode
//!   gavel --total 600 --speech 120          # Bounded speakers list
//!   gavel --json                            # JSON status output
//!
//! The console is the external timing source: `tick` advances the
//! timers and the session clock one nominal second at a time.

use clap::Parser;
use std::io::{self, BufRead, Write};

use gavel::core::{Countdown, DualCountdown, SessionClock, SpeakersList};
use gavel::types::{EventListener, Nation, NationList, SessionPhase, YieldTo};
use gavel::{DEFAULT_SPEECH_SECS, DEFAULT_WARNING_SECS, TICK_INTERVAL_MS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "gavel",
    version = VERSION,
    about = "Gavel - procedural state console for deliberative-assembly sessions",
    long_about = "Gavel models the procedural state of a committee session:\n\
                  a speakers list with per-speaker and total time budgets,\n\
                  a dual countdown timer, and a rate-scaled session clock.\n\n\
                  Modes:\n  \
                  (default)   Interactive session console\n  \
                  --timer N   Bare N-second countdown\n\n\
                  The console drives the timers: type 'tick' (or 'tick 30')\n\
                  to advance them, 'help' for the full command list."
)]
struct Args {
    /// Run a bare countdown of this many seconds instead of a session
    #[arg(long)]
    timer: Option<u32>,

    /// Seconds per speaker
    #[arg(long, default_value_t = DEFAULT_SPEECH_SECS)]
    speech: u32,

    /// Total seconds for the speakers list (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    total: u32,

    /// Warning threshold in seconds
    #[arg(long, default_value_t = DEFAULT_WARNING_SECS)]
    warning: u32,

    /// Session clock rate multiplier
    #[arg(long, default_value_t = 1)]
    rate: i32,

    /// Allow yields on the speakers list
    #[arg(long)]
    yields: bool,

    /// Output status as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(total_secs) = args.timer {
        run_timer_only(total_secs, &args);
    } else {
        run_session(&args);
    }
}

/// Build a listener that announces transitions on the terminal
fn announcer(label: &'static str, no_color: bool) -> EventListener {
    Box::new(move |event| {
        if no_color {
            println!("  [{}] {} at {}", label, event.kind, event.at.format("%H:%M:%S"));
        } else {
            println!(
                "\x1b[90m  [{}] {} at {}\x1b[0m",
                label,
                event.kind,
                event.at.format("%H:%M:%S")
            );
        }
    })
}

/// Run the bare countdown mode
fn run_timer_only(total_secs: u32, args: &Args) {
    let phase = SessionPhase::TimerOnly;
    let mut countdown = Countdown::with_warning(total_secs, Some(args.warning));
    countdown.on_event(announcer("timer", args.no_color));

    print_header("Timer Mode", args.no_color);
    println!("Countdown of {} with a {} s warning.", fmt_secs(total_secs), args.warning);
    println!("Commands: start, stop, reset, tick [n], status, quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(phase, args.no_color));
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        match words.next().unwrap_or("") {
            "start" => countdown.start(),
            "stop" => countdown.stop(),
            "reset" => countdown.reset(),
            "tick" => {
                let count: u32 = words.next().and_then(|w| w.parse().ok()).unwrap_or(1);
                for _ in 0..count {
                    countdown.tick();
                }
            }
            "status" => print_timer_status(&countdown, args),
            "help" => println!("Commands: start, stop, reset, tick [n], status, quit"),
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }
}

/// Print bare countdown status
fn print_timer_status(countdown: &Countdown, args: &Args) {
    if args.json {
        #[derive(serde::Serialize)]
        struct TimerStatus {
            remaining_secs: u32,
            total_secs: u32,
            running: bool,
        }
        let status = TimerStatus {
            remaining_secs: countdown.remaining_secs(),
            total_secs: countdown.total_secs(),
            running: countdown.is_running(),
        };
        println!("{}", serde_json::to_string(&status).unwrap());
    } else {
        println!(
            "  {} / {} | {}",
            fmt_secs(countdown.remaining_secs()),
            fmt_secs(countdown.total_secs()),
            if countdown.is_running() { "running" } else { "stopped" }
        );
    }
}

/// Run the interactive session console
fn run_session(args: &Args) {
    let mut phase = SessionPhase::Idle;
    let mut list = SpeakersList::bounded("Primary", args.speech, args.total);
    if args.yields {
        list = list.allow_yields();
    }

    // The session-total side only matters for bounded lists; an
    // unbounded list still gets a per-speaker countdown.
    let session_secs = if args.total > 0 { args.total } else { u32::MAX };
    let mut dual = DualCountdown::new(session_secs, args.speech, args.warning);
    dual.session_mut().on_event(announcer("session", args.no_color));
    dual.speaker_mut().on_event(announcer("speaker", args.no_color));

    let mut clock = SessionClock::with_rate(chrono::Utc::now(), args.rate);
    let mut roster = NationList::new();

    print_header("Session Mode", args.no_color);
    if args.total > 0 {
        println!(
            "Speakers list: {} s per speaker, {} s total ({} slots).",
            args.speech,
            args.total,
            dual.available_slots()
        );
    } else {
        println!("Speakers list: {} s per speaker, unbounded.", args.speech);
    }
    println!("Type 'help' for commands, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(phase, args.no_color));
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Speeches: {}", list.spoken_log().len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        match words.next().unwrap_or("") {
            "help" => print_help(),
            "add" => {
                let name: Vec<&str> = words.collect();
                if name.is_empty() {
                    println!("Usage: add <nation>");
                    continue;
                }
                let nation = Nation::new(name.join(" "));
                match list.add_nation(nation.clone()) {
                    Ok(slots) if list.capacity().is_some() => {
                        roster.push(nation);
                        phase = SessionPhase::SpeakersList;
                        println!("  Added. Remaining slots: {}", slots);
                    }
                    Ok(size) => {
                        roster.push(nation);
                        phase = SessionPhase::SpeakersList;
                        println!("  Added. List size: {}", size);
                    }
                    Err(e) => println!("  Cannot add: {}", e),
                }
            }
            "present" => {
                let name: Vec<&str> = words.collect();
                let name = name.join(" ");
                let found = match roster.find_mut(&name) {
                    Some(nation) => {
                        nation.attending = true;
                        true
                    }
                    None => false,
                };
                if found {
                    phase = SessionPhase::RollCall;
                    println!(
                        "  {} marked present ({} attending)",
                        name,
                        roster.attending_count()
                    );
                } else if name.is_empty() {
                    println!("Usage: present <nation>");
                } else {
                    println!("  Not on the roster: {}", name);
                }
            }
            "next" => {
                let marker: u32 = words.next().and_then(|w| w.parse().ok()).unwrap_or(0);
                let position = list.advance(marker);
                dual.reset_speaker();
                match list.current_nation() {
                    Some(nation) => println!("  Marker at {} - now speaking: {}", position, nation),
                    None => println!("  Marker at {} - past the end of the roster", position),
                }
            }
            "yield" => {
                let disposition = match words.next() {
                    Some("nation") => YieldTo::ToNation,
                    Some("question") | Some("questions") => YieldTo::ToQuestion,
                    Some("comment") | Some("comments") => YieldTo::ToComment,
                    Some("dais") | Some("chair") => YieldTo::ToDais,
                    Some("none") | None => YieldTo::NoYield,
                    Some(other) => {
                        println!("Unknown yield target: {}", other);
                        continue;
                    }
                };
                match list.record_yield(disposition) {
                    Ok(()) => println!("  Yield recorded: {}", disposition),
                    Err(e) => println!("  Cannot yield: {}", e),
                }
            }
            "start" => {
                clock.start();
                dual.start();
            }
            "stop" => {
                let keep = words.next() == Some("keep");
                dual.stop();
                clock.stop(keep);
            }
            "reset" => dual.reset_speaker(),
            "tick" => {
                let count: u32 = words.next().and_then(|w| w.parse().ok()).unwrap_or(1);
                for _ in 0..count {
                    dual.tick();
                    clock.tick(TICK_INTERVAL_MS);
                }
            }
            "status" => print_session_status(&list, &dual, &clock, phase, args),
            "roster" => {
                if roster.is_empty() {
                    println!("  (empty)");
                } else {
                    for (index, nation) in roster.iter().enumerate() {
                        let marker = if index == list.current() { ">" } else { " " };
                        let here = if nation.attending { "present" } else { "absent" };
                        println!(
                            "  {} {} [{}] {}",
                            marker,
                            nation,
                            nation.vote_weight_display(),
                            here
                        );
                    }
                }
            }
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <nation>     append a nation to the roster and speakers list");
    println!("  present <nation> mark a nation as attending");
    println!("  next [marker]    close the speech, move the marker on");
    println!("  yield <target>   record a yield (nation/question/comment/dais/none)");
    println!("  start            start timers and session clock");
    println!("  stop [keep]      stop timers; 'keep' lets the clock flow through");
    println!("  reset            reset the per-speaker countdown");
    println!("  tick [n]         advance timers and clock by n seconds");
    println!("  roster           show the speaking order");
    println!("  status           show timers, marker and clock");
    println!("  quit             exit");
}

/// Print session status, colored or JSON
fn print_session_status(
    list: &SpeakersList,
    dual: &DualCountdown,
    clock: &SessionClock,
    phase: SessionPhase,
    args: &Args,
) {
    if args.json {
        #[derive(serde::Serialize)]
        struct SessionStatus<'a> {
            phase: SessionPhase,
            speaker: Option<&'a str>,
            marker: usize,
            speaker_remaining_secs: u32,
            session_remaining_secs: Option<u32>,
            running: bool,
            clock: chrono::DateTime<chrono::Utc>,
        }
        let status = SessionStatus {
            phase,
            speaker: list.current_nation().map(|n| n.name.as_str()),
            marker: list.current(),
            speaker_remaining_secs: dual.speaker().remaining_secs(),
            session_remaining_secs: (list.total_secs() > 0)
                .then(|| dual.session().remaining_secs()),
            running: dual.is_running(),
            clock: clock.current(),
        };
        println!("{}", serde_json::to_string(&status).unwrap());
        return;
    }

    let color = if args.no_color { "" } else { phase.color_code() };
    let reset = if args.no_color { "" } else { SessionPhase::color_reset() };
    let speaker = list
        .current_nation()
        .map(|n| n.name.clone())
        .unwrap_or_else(|| "-".to_string());
    let total = if list.total_secs() > 0 {
        fmt_secs(dual.session().remaining_secs())
    } else {
        "unbounded".to_string()
    };

    println!(
        "{}  [{}] speaking: {} | speaker {} | total {} | {} | clock {}{}",
        color,
        phase,
        speaker,
        fmt_secs(dual.speaker().remaining_secs()),
        total,
        if dual.is_running() { "running" } else { "stopped" },
        clock.current().format("%H:%M:%S"),
        reset
    );
}

/// Format seconds as m:ss
fn fmt_secs(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Gavel v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Gavel v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Format the console prompt
fn format_prompt(phase: SessionPhase, no_color: bool) -> String {
    if no_color {
        format!("[{}] > ", phase)
    } else {
        format!(
            "{}[{}]{} > ",
            phase.color_code(),
            phase,
            SessionPhase::color_reset()
        )
    }
}
