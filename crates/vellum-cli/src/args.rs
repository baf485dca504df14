//! Command-line argument definitions for the Vellum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select gallery diagrams, the output directory,
//! the configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Vellum diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Gallery diagrams to render; all of them when none are named
    #[arg(help = "Names of the gallery diagrams to render")]
    pub diagrams: Vec<String>,

    /// Directory the `<name>.svg` files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Embed a stylesheet so the files render on their own
    #[arg(long)]
    pub standalone: bool,

    /// List the gallery diagrams and exit
    #[arg(long)]
    pub list: bool,
}
