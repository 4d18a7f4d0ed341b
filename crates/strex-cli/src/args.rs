use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "strex",
    version,
    about = "Render string extraction results as a terminal report"
)]
pub struct Args {
    /// Path to the results JSON document
    pub results: PathBuf,

    /// Show offsets, addresses, function groupings and extended metadata
    #[arg(short, long)]
    pub verbose: bool,

    /// Omit the title, metadata, section headings and table headers
    #[arg(long)]
    pub disable_headers: bool,

    /// Color output: always, auto or never
    #[arg(long, default_value = "auto")]
    pub color: String,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
