//! CLI for the FLAMES game.
//!
//! Usage:
//!   flames calc <name1> <name2> [--delay-ms N] [--no-history] [-v]
//!   flames history
//!   flames clear
//!
//! History is kept in `<history-dir>/flamesHistory.json`.

use clap::{Parser, Subcommand};
use flames_rs::{
    Config, FileStore, FlamesError, History, KeyValueStore, Reading, Session, compute_outcome,
    trace, validate_names,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

/// Find out what two names are destined to be.
#[derive(Parser)]
#[command(name = "flames", version)]
struct Cli {
    /// Directory holding the history file
    #[arg(long, global = true, env = "FLAMES_HISTORY_DIR")]
    history_dir: Option<PathBuf>,

    /// Number of readings kept in history
    #[arg(long, global = true)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the relationship between two names
    Calc {
        name1: String,
        name2: String,

        /// Animation length in milliseconds (0 to skip)
        #[arg(long, env = "FLAMES_DELAY_MS")]
        delay_ms: Option<u64>,

        /// Do not record this reading
        #[arg(long)]
        no_history: bool,

        /// Show the cancellation and elimination steps on stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// List recent readings, newest first
    History,
    /// Forget all recorded readings
    Clear,
}

const FRAMES: [&str; 4] = ["🔥   ", "🔥🔥  ", "🔥🔥🔥 ", "🔥🔥🔥🔥"];

/// Draw the flame animation on stderr for `delay`.
fn animate(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    let start = Instant::now();
    let mut stderr = io::stderr();
    let mut frame = 0;
    while start.elapsed() < delay {
        let _ = write!(stderr, "\r{}", FRAMES[frame % FRAMES.len()]);
        let _ = stderr.flush();
        frame += 1;
        thread::sleep(Duration::from_millis(150).min(delay.saturating_sub(start.elapsed())));
    }
    let _ = write!(stderr, "\r{}\r", " ".repeat(12));
    let _ = stderr.flush();
}

fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Validate the names, run `wait`, then compute and record the reading.
///
/// Nothing is recorded if the process dies during `wait`.
fn calc_reading<S: KeyValueStore>(
    name1: &str,
    name2: &str,
    history: Option<History<S>>,
    wait: impl FnOnce(),
) -> Result<Reading, FlamesError> {
    let (name1, name2) = validate_names(name1, name2)?;
    wait();

    match history {
        Some(history) => Session::new(history).calculate(&name1, &name2, &local_timestamp()),
        None => {
            let outcome = compute_outcome(&name1, &name2);
            Ok(Reading {
                name1,
                name2,
                outcome,
            })
        }
    }
}

fn run(cli: Cli) -> Result<(), FlamesError> {
    let mut config = Config::new();
    if let Some(dir) = cli.history_dir {
        config = config.with_history_dir(dir);
    }
    if let Some(limit) = cli.limit {
        config = config.with_history_limit(limit);
    }
    log::debug!("Using {config:?}");

    let store = FileStore::new(&config.history_dir);
    let mut history = History::with_limit(store, config.history_limit);

    match cli.command {
        Command::Calc {
            name1,
            name2,
            delay_ms,
            no_history,
            verbose,
        } => {
            if let Some(ms) = delay_ms {
                config = config.with_delay_ms(ms);
            }

            let history = (!no_history).then_some(history);
            let delay = config.animation_delay;
            let reading = calc_reading(&name1, &name2, history, || animate(delay))?;

            if verbose {
                for line in trace(&reading.name1, &reading.name2).lines() {
                    eprintln!("{line}");
                }
            }
            println!("{}", reading.message());
        }
        Command::History => {
            let entries = history.entries()?;
            if entries.is_empty() {
                println!("No history yet. Start calculating!");
            }
            for entry in entries {
                println!("{}", entry.summary());
            }
        }
        Command::Clear => {
            history.clear()?;
            eprintln!("History cleared");
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
