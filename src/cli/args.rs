//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// headstart resource-hint planner CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: headstart.toml)
    #[arg(short = 'C', long, default_value = "headstart.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the hints held once a route settles
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },

    /// Replay a recorded event script against the engine
    #[command(visible_alias = "s")]
    Simulate {
        #[command(flatten)]
        args: SimulateArgs,
    },

    /// Validate the configuration and report what it wires up
    #[command(visible_alias = "c")]
    Check,
}

/// Plan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PlanArgs {
    /// Route to plan for
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Additional critical image to include in the mount batch
    /// (repeatable)
    #[arg(short = 'i', long = "image", value_name = "PATH")]
    pub images: Vec<String>,

    /// Output JSON instead of rendered link elements
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Simulate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Scenario file (JSON). Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub scenario: PathBuf,

    /// Output JSON instead of the textual timeline
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
