//! Command-line argument definitions for the IDP processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::constants::{DEFAULT_OUTPUT_DIR, TEMPLATE_FILENAME};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the IDP processor
///
/// Turns Individual Development Plan spreadsheet exports into KPI reports and
/// a star schema of CSV tables ready for SQL or BI tools.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "idp-processor",
    version,
    about = "Normalize IDP spreadsheet exports into a star schema and KPI reports",
    long_about = "Parses Individual Development Plan (IDP) exports with Spanish headers, \
                  comma or semicolon delimited, normalizes them into one fact table and six \
                  dimension tables, and reports progress, completion and risk indicators."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an upload, export the star schema and print a summary
    Process(ProcessArgs),
    /// Print KPI statistics and chart breakdowns for an upload
    Stats(StatsArgs),
    /// Write the upload template
    Template(TemplateArgs),
}

/// Options shared by commands that read an upload
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct InputArgs {
    /// IDP export to read (CSV, comma or semicolon delimited)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: PathBuf,

    /// Keep only records of this country code (e.g. PE)
    #[arg(long = "country", value_name = "CODE")]
    pub country: Option<String>,

    /// Keep only records of this manager
    #[arg(long = "manager", value_name = "NAME")]
    pub manager: Option<String>,

    /// Path to configuration file (TOML format)
    ///
    /// If not specified, looks for <config dir>/idp-processor/config.toml
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Seed for codes synthesized for rows without one
    ///
    /// Makes repeated runs over the same file produce identical collaborator keys.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the process command
#[derive(Debug, Clone, ClapArgs)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory for the exported star-schema tables
    ///
    /// Created if it does not exist. Each table is written as <TableName>.csv.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,
}

/// Arguments for the stats command
#[derive(Debug, Clone, ClapArgs)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Include the insight request payload for the text-analysis service
    #[arg(long = "insight")]
    pub insight: bool,
}

/// Arguments for the template command
#[derive(Debug, Clone, ClapArgs)]
pub struct TemplateArgs {
    /// Destination file, `-` for standard output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = TEMPLATE_FILENAME
    )]
    pub output: PathBuf,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl InputArgs {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.country.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(Error::configuration("Country filter cannot be empty"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Country filter as stored on records (upper-cased)
    pub fn country_filter(&self) -> Option<String> {
        self.country.as_ref().map(|c| c.trim().to_uppercase())
    }
}

impl TemplateArgs {
    /// True when the template goes to standard output
    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_process_defaults() {
        let args = Args::try_parse_from(["idp-processor", "process", "-i", "upload.csv"]).unwrap();

        match args.command {
            Some(Commands::Process(process)) => {
                assert_eq!(process.input.input_path, PathBuf::from("upload.csv"));
                assert_eq!(process.output_dir, PathBuf::from("star_schema"));
                assert_eq!(process.input.output_format, OutputFormat::Human);
                assert_eq!(process.input.get_log_level(), "warn");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_stats_with_filters() {
        let args = Args::try_parse_from([
            "idp-processor",
            "stats",
            "-i",
            "upload.csv",
            "--country",
            "pe",
            "--manager",
            "Maria Lopez",
            "--insight",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        let Some(Commands::Stats(stats)) = args.command else {
            panic!("expected stats command");
        };
        assert!(stats.insight);
        assert_eq!(stats.input.country_filter().as_deref(), Some("PE"));
        assert_eq!(stats.input.manager.as_deref(), Some("Maria Lopez"));
        assert_eq!(stats.input.output_format, OutputFormat::Json);
        assert_eq!(stats.input.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["idp-processor", "stats", "-i", "x.csv", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_output() {
        let args = Args::try_parse_from(["idp-processor", "template"]).unwrap();
        let Some(Commands::Template(template)) = args.command else {
            panic!("expected template command");
        };
        assert_eq!(template.output, PathBuf::from("plantilla_idp_2025.csv"));
        assert!(!template.to_stdout());

        let args = Args::try_parse_from(["idp-processor", "template", "-o", "-"]).unwrap();
        let Some(Commands::Template(template)) = args.command else {
            panic!("expected template command");
        };
        assert!(template.to_stdout());
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["idp-processor"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_validate_input_file() {
        let missing = InputArgs {
            input_path: PathBuf::from("/no/such/file.csv"),
            ..InputArgs::default()
        };
        assert!(matches!(missing.validate(), Err(Error::Configuration { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Código,Nombre").unwrap();
        let present = InputArgs {
            input_path: file.path().to_path_buf(),
            ..InputArgs::default()
        };
        assert!(present.validate().is_ok());
    }
}
