use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "livestock-ai")]
#[command(about = "AI-powered cattle vs. buffalo image classification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one or more images (files and/or folders)
    Classify {
        /// Image files or folders to classify
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Write all records of this run to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Classification proxy endpoint (overrides config and env)
        #[arg(long)]
        proxy_url: Option<String>,
    },

    /// Export one saved record as a formatted JSON report
    Export {
        /// Records JSON produced by `classify --output`
        #[arg(required = true)]
        input: PathBuf,

        /// Record id to export (default: the newest record)
        #[arg(long)]
        id: Option<String>,

        /// Output file (default: classification-<id>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or update CLI configuration
    Config {
        /// Set the classification proxy endpoint
        #[arg(long)]
        set_proxy_url: Option<String>,
    },
}
