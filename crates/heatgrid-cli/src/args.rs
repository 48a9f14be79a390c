//! Command-line argument definitions for the Heatgrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Heatgrid heatmap tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input dataset (TOML)
    #[arg(help = "Path to the input dataset")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lay sections out as columns regardless of the dataset shape
    #[arg(long)]
    pub horizontal: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["heatgrid", "week.toml"]);
        assert_eq!(args.input, "week.toml");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config, None);
        assert!(!args.horizontal);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "heatgrid",
            "week.toml",
            "-o",
            "week.svg",
            "-c",
            "style.toml",
            "--horizontal",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output, "week.svg");
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert!(args.horizontal);
        assert_eq!(args.log_level, "debug");
    }
}
