//! Knuth (Fisher-Yates) shuffle of comma-separated integers.
//!
//! Seeded from `RAND_SEED` for reproducible output, otherwise from the clock.

use anyhow::Result;
use clap::Parser;
use prose::shuffle::input::seed_from_env;
use prose::shuffle::{format_sequence, knuth_shuffle, parse_sequence, resolve_seed};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "knuth-shuffle", version)]
struct Args {
    /// Comma-separated integers, e.g. "5,3,8,1,9"
    #[arg(allow_hyphen_values = true)]
    values: String,

    /// Print the seed source to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<String> {
    let (mut rng, source) = resolve_seed(seed_from_env())?;
    if args.verbose {
        eprintln!("[VERBOSE] seed: {} (state {})", source, rng.state());
    }

    let mut values = parse_sequence(&args.values)?;
    knuth_shuffle(&mut values, &mut rng);
    Ok(format_sequence(&values))
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("Usage: knuth-shuffle <comma-separated integers>");
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
