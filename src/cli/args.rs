//! Command-line argument definitions for the registry compiler.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the METAR station registry compiler
///
/// Fetches the NOAA and OurAirports station listings, reconciles them by
/// ICAO identifier, and rewrites the data section of the registry file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metar-stations",
    version,
    about = "Compile the METAR station registry from NOAA and OurAirports data",
    long_about = "Fetches the NOAA fixed-width station listing and the OurAirports CSV \
                  listing concurrently, reconciles them into one record per ICAO \
                  identifier, and rewrites the marker-delimited data section of the \
                  registry file. The run is all-or-nothing: any fetch, parse, or write \
                  failure aborts without touching the registry."
)]
pub struct Args {
    /// Override the fixed-width primary source URL (NOAA stations.txt)
    #[arg(long = "primary-url", value_name = "URL")]
    pub primary_url: Option<String>,

    /// Override the CSV secondary source URL (OurAirports airports.csv)
    #[arg(long = "secondary-url", value_name = "URL")]
    pub secondary_url: Option<String>,

    /// Registry file whose data section is rewritten
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Marker text of the line opening the registry data section
    #[arg(long = "marker", value_name = "TEXT")]
    pub marker: Option<String>,

    /// Per-fetch timeout in seconds
    #[arg(short = 't', long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Fetch, parse and reconcile, but do not write the registry file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate argument consistency before the run starts.
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err(Error::configuration(
                    "timeout must be greater than 0 seconds",
                ));
            }
        }
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the log level from the verbosity flags.
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            primary_url: None,
            secondary_url: None,
            output_path: None,
            marker: None,
            timeout_secs: None,
            config_file: None,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_default_args_validate() {
        assert!(args().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut invalid = args();
        invalid.timeout_secs = Some(0);
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_nonexistent_config_file_rejected() {
        let mut invalid = args();
        invalid.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut a = args();
        assert_eq!(a.get_log_level(), "warn");
        a.verbose = 1;
        assert_eq!(a.get_log_level(), "info");
        a.verbose = 2;
        assert_eq!(a.get_log_level(), "debug");
        a.verbose = 5;
        assert_eq!(a.get_log_level(), "trace");
        a.verbose = 0;
        a.quiet = true;
        assert_eq!(a.get_log_level(), "error");
    }
}
