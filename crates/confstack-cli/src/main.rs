//! confstack CLI
//!
//! The command-line interface for resolving keys from layered config files.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(root = %cli.root.display(), "Starting confstack");

    let resolver = commands::build_resolver(&cli)?;

    match &cli.command {
        Commands::Get { key, default, json } => {
            commands::run_get(&resolver, key, default.as_deref(), *json)
        }
        Commands::Paths { key, json } => commands::run_paths(&resolver, key, *json),
        Commands::Show { key } => commands::run_show(&resolver, key),
    }
}
