//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Terminal wizard for composing, refining, rating, and exporting LLM prompts
#[derive(Debug, Parser)]
#[command(name = "promptmagic", version, about)]
pub struct Cli {
    /// Path to a config file (default: <config_dir>/promptmagic/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where the Export step writes its JSON file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Disable inline suggestions for this session
    #[arg(long)]
    pub no_suggest: bool,
}
