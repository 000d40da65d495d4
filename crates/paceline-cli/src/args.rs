//! Command-line argument definitions for the Paceline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control input/output paths, the output
//! format, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output format for the processed workout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Render the workout timeline as SVG.
    Svg,
    /// Emit the workout as its canonical JSON document.
    Json,
}

/// Command-line arguments for the Paceline workout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input PaceML file (a `.json` input is read as a
    /// workout JSON document)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
