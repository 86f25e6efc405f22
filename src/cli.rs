//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Resolve and check the modified-gravity input of a cosmological solver.
#[derive(Debug, Parser)]
#[command(name = "smgres")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Parameter file to resolve (flat TOML key/value table).
    #[arg(required_unless_present = "list_models")]
    pub input: Option<PathBuf>,

    /// Print the resolved configuration and precision as JSON.
    #[arg(long)]
    pub json: bool,

    /// List the gravity models in the built-in catalog and exit.
    #[arg(long)]
    pub list_models: bool,

    /// Increase log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
