use anyhow::{anyhow, Result};
use clap::Parser;
use prose::config::Config;
use prose::console::{ConsoleReporter, Reporter, BOLD, CYAN, GREEN, RESET};
use prose::installer::{run_install, Agent, DataDir, InstallOptions, Scope};
use prose::VERSION;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "prose-install",
    version,
    about = "Install prose-lang specification and AI agent skills.",
    after_help = "examples:\n  prose-install --scope local  --agent gemini    # install into CWD\n  prose-install --scope global --agent claude    # install into ~/\n  prose-install --scope local  --agent copilot   # install into CWD for Copilot"
)]
struct Args {
    /// local = install into CWD, global = install into home directory
    #[arg(long, value_enum)]
    scope: Option<Scope>,

    /// AI agent to install skills for
    #[arg(long, value_enum)]
    agent: Option<Agent>,

    /// Directory containing specification.md, skills-template/ and scripts/
    #[arg(long, env = "PROSE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print diagnostic detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn banner() {
    println!();
    println!("{}{}╔══════════════════════════════════════════╗", CYAN, BOLD);
    println!("║        🖊  Prose-Lang Installer  v{:<7}║", VERSION);
    println!("╚══════════════════════════════════════════╝{}", RESET);
    println!();
}

fn build_options(args: Args, config: Config) -> Result<InstallOptions> {
    let scope = args
        .scope
        .or(config.default_scope)
        .ok_or_else(|| anyhow!("--scope is required (local or global)"))?;
    let agent = args
        .agent
        .or(config.default_agent)
        .ok_or_else(|| anyhow!("--agent is required"))?;
    let explicit = args.data_dir.or(config.data_dir);

    InstallOptions::for_scope(scope, agent, DataDir::resolve(explicit.as_deref()))
}

fn run(args: Args, reporter: &ConsoleReporter) -> Result<()> {
    let config = Config::load()?;
    let options = build_options(args, config)?;

    reporter.info(&format!("Scope   : {}{}{}", BOLD, options.scope, RESET));
    reporter.info(&format!("Agent   : {}{}{}", BOLD, options.agent, RESET));
    reporter.info(&format!("Target  : {}{}{}", BOLD, options.target.display(), RESET));
    println!();

    let summary = run_install(&options, reporter)?;
    reporter.verbose(&format!(
        "{} installed, {} upgraded",
        summary.installed, summary.upgraded
    ));

    println!();
    println!("{}{}  Done!{}  Prose-lang is ready. 🚀", GREEN, BOLD, RESET);
    println!();
    Ok(())
}

fn main() {
    let args = Args::parse();
    let reporter = ConsoleReporter::new(args.verbose);

    banner();

    if let Err(e) = run(args, &reporter) {
        reporter.err(&format!("{:#}", e));
        process::exit(1);
    }
}
