//! Command-line argument definitions for the result portal
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the exam result portal
///
/// Looks up a student's exam result in a college's published result sheet
/// and prints the marksheet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "result-portal",
    version,
    about = "Look up exam results from published spreadsheet CSV exports"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON config file with the college registry
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Look up one student's result and print the marksheet
    Lookup(LookupArgs),
    /// List the configured colleges
    Colleges,
    /// Parse a result sheet and report row statistics
    Inspect(InspectArgs),
}

/// Arguments for the lookup command
#[derive(Debug, Clone, ClapArgs)]
pub struct LookupArgs {
    /// College id from the registry, e.g. college1
    #[arg(short, long, default_value = "")]
    pub college: String,

    /// Standard/class
    #[arg(short, long, default_value = "")]
    pub standard: String,

    /// Roll number (digits only)
    #[arg(short, long = "roll", default_value = "")]
    pub roll_number: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Answer from the built-in sample sheet instead of the college's sheet
    #[arg(long)]
    pub demo: bool,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, ClapArgs)]
pub struct InspectArgs {
    /// Sheet location: local CSV path or http(s) URL
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Print every dropped row with its reason
    #[arg(long)]
    pub show_dropped: bool,
}

/// How lookup results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_parsing() {
        let args = Args::parse_from([
            "result-portal",
            "lookup",
            "--college",
            "college1",
            "--standard",
            "5",
            "--roll",
            "101",
            "--format",
            "json",
        ]);

        match args.command {
            Some(Commands::Lookup(lookup)) => {
                assert_eq!(lookup.college, "college1");
                assert_eq!(lookup.standard, "5");
                assert_eq!(lookup.roll_number, "101");
                assert_eq!(lookup.format, OutputFormat::Json);
                assert!(!lookup.demo);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_lookup_fields_default_to_empty() {
        let args = Args::parse_from(["result-portal", "lookup", "--demo"]);
        match args.command {
            Some(Commands::Lookup(lookup)) => {
                assert!(lookup.college.is_empty());
                assert!(lookup.demo);
                assert_eq!(lookup.format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(Args::parse_from(["result-portal"]).get_log_level(), "warn");
        assert_eq!(
            Args::parse_from(["result-portal", "-vv", "colleges"]).get_log_level(),
            "trace"
        );
        assert_eq!(
            Args::parse_from(["result-portal", "colleges", "-q"]).get_log_level(),
            "error"
        );
    }

    #[test]
    fn test_no_subcommand() {
        assert!(Args::parse_from(["result-portal"]).command.is_none());
    }
}
