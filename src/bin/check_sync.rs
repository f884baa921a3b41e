//! Check whether a .prose source file is out of sync with its stored
//! metadata hash. Prints a JSON report on stdout.

use clap::Parser;
use prose::config::Config;
use prose::sync_check::{check_sync, HashAlgorithm};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: prose-check-sync <source_file> <metadata_file>";

#[derive(Parser, Debug)]
#[command(name = "prose-check-sync", version)]
struct Args {
    source_file: PathBuf,
    metadata_file: PathBuf,

    /// Hash algorithm; defaults to the config value, then md5
    #[arg(long, value_enum)]
    algorithm: Option<HashAlgorithm>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Config errors fall back to defaults.
    let config = Config::load().unwrap_or_else(|e| {
        if args.verbose {
            eprintln!("[VERBOSE] ignoring config: {:#}", e);
        }
        Config::default()
    });
    let algorithm = args.algorithm.unwrap_or_else(|| config.hash_algorithm());
    if args.verbose {
        eprintln!("[VERBOSE] algorithm: {:?}", algorithm);
    }

    let report = check_sync(&args.source_file, &args.metadata_file, algorithm);
    println!("{}", report.to_json());
}
