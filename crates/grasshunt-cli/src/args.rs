use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grasshunt")]
#[command(about = "Aggregate uploaded grass hunt logs into completion reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory holding one subdirectory of raw log files per player
    #[arg(long, default_value = "/tmp/grass-collector", global = true)]
    pub log_root: PathBuf,

    /// TOML file listing every scene expected to contain grass
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full report: players, scenes, and every recorded grass location
    Report {
        /// Print ingest counts to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Scene rollup only, uncleared scenes first
    Scenes,

    /// Per-player rollup only
    Players,
}
