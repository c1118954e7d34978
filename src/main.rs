//! headstart - resource-hint planning and simulation CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use headstart::cli::{self, Cli, Commands};
use headstart::config::PreloadConfig;
use headstart::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = PreloadConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Plan { args } => cli::plan::run(args, &config),
        Commands::Simulate { args } => cli::simulate::run(args, &config),
        Commands::Check => cli::check::run(&config),
    }
}
