//! # numlike
//!
//! Prints both sides of two algebraic identities for fractions and complex numbers, then a
//! sorted list of fractions.
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use numlike::algorithm::demo;

#[derive(Parser, Debug)]
#[clap(name = "numlike", version, about)]
struct Args {
    /// Wait for Enter before exiting
    #[clap(long)]
    pause: bool,
    /// Log more, repeat for even more (overridden by RUST_LOG)
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let result = demo::run(&mut stdout.lock());
    if let Err(error) = result {
        error!(%error, "demonstration failed");
        eprintln!("numlike: {}", error);
        process::exit(1);
    }

    if args.pause {
        pause();
    }
}

/// Logs go to stderr, stdout only carries the demonstration output.
fn init_logging(verbose: usize) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn pause() {
    eprint!("Press Enter to exit...");
    let _ = io::stderr().flush();
    if let Err(error) = io::stdin().lock().read_line(&mut String::new()) {
        warn!(%error, "could not wait for input");
    }
}
