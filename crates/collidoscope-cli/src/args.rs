//! Command-line argument definitions for the collidoscope CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which figures to render, where the SVG
//! files go, and how verbose the logging is.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the collidoscope figure renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Names of the figures to render (all figures when omitted)
    #[arg(help = "Figure names to render; omit to render all")]
    pub figures: Vec<String>,

    /// Directory the SVG files are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the available figure names and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
