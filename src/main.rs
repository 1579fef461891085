//! Cadence interactive entry point.
//!
//! A thin synchronous shell around the scheduling core: load (or seed) a
//! schedule, then read one command line at a time, parse it, execute it,
//! print the result, and persist after every successful command. Errors are
//! reported and never terminate the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cadence::{load_schedule, parse_command, sample_schedule, save_schedule, Schedule};

/// Cadence: personal scheduling assistant.
#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the schedule data file
    #[arg(short, long, default_value = "cadence.json")]
    data: PathBuf,

    /// Output command results as JSON
    #[arg(long)]
    json: bool,

    /// Start from the sample schedule, ignoring any data file
    #[arg(long)]
    sample: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut schedule = if args.sample {
        sample_schedule()
    } else if args.data.exists() {
        load_schedule(&args.data)
            .with_context(|| format!("failed to load {}", args.data.display()))?
    } else {
        sample_schedule()
    };

    run_session(&mut schedule, &args)
}

fn run_session(schedule: &mut Schedule, args: &Args) -> anyhow::Result<()> {
    if !args.json {
        println!("Welcome to Cadence. Type 'help' for usage.");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if !args.json {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                print_error(&err.to_string(), args.json);
                continue;
            }
        };

        let now = chrono::Local::now().naive_local();
        match command.execute(schedule, now) {
            Ok(result) => {
                if args.json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    println!("{}", result.message);
                }
                if let Err(err) = save_schedule(schedule, &args.data) {
                    warn!("failed to save schedule: {err}");
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => print_error(&err.to_string(), args.json),
        }
    }

    Ok(())
}

fn print_error(message: &str, json: bool) {
    if json {
        println!(r#"{{"error":{}}}"#, serde_json::Value::from(message));
    } else {
        println!("{message}");
    }
}
