//! Command-line argument definitions for the Hilltop processor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::app::services::mapping::SiteEntry;
use crate::app::services::value_extractor::LocalZone;

/// CLI arguments for the Hilltop to FITS processor
///
/// Decodes Hilltop XML exports and sends each reading as a canonical FITS
/// observation message.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hilltop-fits",
    version,
    about = "Convert Hilltop XML time-series exports into FITS observation messages",
    long_about = "Decodes Hilltop XML environmental time-series exports, resolves Hilltop site \
                  and parameter names to FITS identifiers, and emits one observation message per \
                  reading. Measurements for unknown sites or parameters are skipped with a \
                  warning; malformed value lines fail the file."
)]
pub struct Args {
    /// Hilltop XML files to process, in order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML file providing network, method, sites and optional units.
    /// Command-line values override it.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// FITS network identifier
    #[arg(long, value_name = "ID", help = "Provide the FITS network")]
    pub network: Option<String>,

    /// FITS method identifier
    #[arg(long, value_name = "ID", help = "Provide the FITS method")]
    pub method: Option<String>,

    /// Site name conversions, repeatable
    #[arg(
        long = "site",
        value_name = "LABEL=CODE",
        help = "Pass source name to site id conversions [\"label\"=\"code\"]"
    )]
    pub sites: Vec<SiteEntry>,

    /// Zone for timestamps not marked as UTC
    ///
    /// `host` uses the timezone of this process (legacy behaviour); an
    /// offset such as `+12:00` pins it explicitly.
    #[arg(
        long = "local-offset",
        value_name = "ZONE",
        help = "Zone for non-UTC timestamps: 'host' or an offset like '+12:00'"
    )]
    pub local_offset: Option<LocalZone>,

    /// Write encoded observations to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Encode observations but don't deliver them
    #[arg(long = "dry-run", help = "Don't actually send the messages")]
    pub dry_run: bool,

    /// Continue with the next file after a decode or parse failure
    #[arg(long = "keep-going")]
    pub keep_going: bool,

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
}

impl Args {
    /// Log level implied by `-v`/`-q`
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
