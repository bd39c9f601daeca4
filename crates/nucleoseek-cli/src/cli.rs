use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Nucleoseek CLI - A headless driver for the nuclear stability discovery toy: a random walker hunts for stable nuclei while a judge scores its claims against real element data.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the discovery simulation for a number of ticks.
    Run(RunArgs),
    /// List the element catalog the judge measures discoveries against.
    Elements(ElementsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of simulation ticks to execute.
    #[arg(short, long, default_value_t = 10_000, value_name = "NUM")]
    pub ticks: u64,

    /// Seed for the engine's random source; omit for a fresh random run.
    #[arg(short, long, value_name = "NUM")]
    pub seed: Option<u64>,

    /// Proton ceiling handed to the engine. Defaults to the catalog size.
    #[arg(long, default_value_t = 118, value_name = "NUM")]
    pub max_z: u32,

    /// Path to a TOML file overriding the engine's tunable parameters.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final report as JSON instead of a human-readable summary.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `elements` subcommand.
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Print the catalog as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
