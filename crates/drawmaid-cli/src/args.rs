//! Command-line argument definitions for the drawmaid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Exactly one input source is required: a file path or the
//! flowchart text itself.

use clap::{ArgGroup, Parser};

/// Command-line arguments for the drawmaid converter
#[derive(Parser, Debug, Default)]
#[command(name = "drawmaid", author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["input_file", "input_string"]),
))]
pub struct Args {
    /// Path to a Mermaid flowchart file
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input_file: Option<String>,

    /// Mermaid flowchart text
    #[arg(short = 's', long, value_name = "TEXT")]
    pub input_string: Option<String>,

    /// Path to the output draw.io file
    #[arg(short, long, value_name = "PATH")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
