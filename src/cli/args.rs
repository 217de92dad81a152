//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Single-user degree planner: modules, semester plans and requirement
/// tracking driven by a typed command language
#[derive(Parser, Debug)]
#[command(name = "modplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output (repeat for more verbosity)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Planner data file (overrides config and MODPLAN_DATA_FILE)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data_file: Option<PathBuf>,

    /// Execute one command and exit instead of entering the prompt
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version info
    #[arg(long)]
    pub info: bool,
}
