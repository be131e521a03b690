//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cacscan")]
#[command(about = "DoD ID card barcode scan station", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single scanned barcode payload
    #[command(visible_alias = "d")]
    Decode {
        /// Raw payload as produced by the scanner
        raw: String,

        /// Print the decoded record as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Interactive scan session reading payloads from stdin
    #[command(visible_alias = "s")]
    Scan {
        /// Scan log each accepted scan is appended to (uses configured default if not provided)
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Export the session to this CSV file when input ends
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode a file of payloads (one per line) to CSV
    #[command(visible_alias = "b")]
    Batch {
        /// File with one raw payload per line
        input: PathBuf,

        /// CSV output path (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default scan log path
        #[arg(long)]
        log: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
