use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::{Env, Target};
use ff_lookup_core::Config;
use std::fs::File;
use std::path::PathBuf;

mod lookup;
mod tui;
mod validate;

#[derive(Parser)]
#[command(name = "ff-lookup")]
#[command(about = "Look up Free Fire player accounts by UID", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write log records to this file (keeps the dashboard screen clean)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui(tui::TuiArgs),

    /// Look up a single UID and print the result
    #[command(alias = "l")]
    Lookup(lookup::LookupArgs),

    /// Check whether a UID would be accepted
    #[command(alias = "v")]
    Validate(validate::ValidateArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug; RUST_LOG still wins
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    let mut logger = env_logger::Builder::from_env(env);
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        logger.target(Target::Pipe(Box::new(file)));
    }
    logger.init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    log::debug!("configuration: {config:?}");

    match cli.command {
        None => tui::execute(tui::TuiArgs::default(), &config),
        Some(Commands::Tui(args)) => tui::execute(args, &config),
        Some(Commands::Lookup(args)) => lookup::execute(args, &config),
        Some(Commands::Validate(args)) => validate::execute(args),
    }
}
