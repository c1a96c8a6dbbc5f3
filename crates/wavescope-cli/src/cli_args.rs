//! CLI argument definitions for the wavescope command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Wavescope - Signal Modulation Oscilloscope
#[derive(Parser)]
#[command(name = "wavescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a scene file without rendering traces
    Validate {
        /// Path to the scene file (JSON)
        #[arg(short, long)]
        scene: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate all channels once and write the traces
    Render {
        /// Path to the scene file (JSON)
        #[arg(short, long)]
        scene: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
        format: String,
    },

    /// Interactive run/freeze/reset loop that re-renders on every tick
    Scope {
        /// Path to the scene file (JSON)
        #[arg(short, long)]
        scene: String,

        /// Output file rewritten on every running tick
        #[arg(short, long)]
        output: String,

        /// Output format
        #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
        format: String,
    },
}
