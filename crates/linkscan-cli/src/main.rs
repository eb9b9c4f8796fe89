use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "linkscan")]
#[command(about = "List every symbolic link in a directory tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory to scan (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show absolute paths instead of root-relative paths
    #[arg(long)]
    pub absolute: bool,

    /// Additional directory names to exclude from the scan
    #[arg(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Config file to load instead of the default locations
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output (default)
    Text,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = if std::env::var("LINKSCAN_DEBUG").is_ok() {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::scan::run(
        cli.root,
        cli.absolute,
        cli.exclude,
        cli.config,
        cli.format,
    )
}
