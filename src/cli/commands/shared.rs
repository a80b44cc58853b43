//! Shared components for CLI commands
//!
//! This module contains run statistics, logging setup, and layered
//! configuration loading.

use colored::*;
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Processing statistics for the end-of-run report
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Files decoded and assembled successfully
    pub files_processed: usize,
    /// Files that failed to decode or parse
    pub files_failed: usize,
    /// Observations handed to the sink
    pub observations_delivered: usize,
    /// Measurements skipped for unknown identifiers
    pub measurements_skipped: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunStats {
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }
}

/// Set up structured logging
///
/// `RUST_LOG` takes precedence over `-v`/`-q`.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    if let Some(config_path) = &args.config_file {
        info!("Using config file: {}", config_path.display());
    }

    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);

    config.validate()?;
    if config.dry_run && args.output.is_some() {
        return Err(Error::configuration(
            "dry run is enabled; --output cannot be used with it",
        ));
    }

    debug!(
        "Configuration: network={} method={} sites={} local_offset={}",
        config.network, config.method, config.sites, config.local_offset
    );
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(network) = &args.network {
        config.network = network.clone();
    }
    if let Some(method) = &args.method {
        config.method = method.clone();
    }
    if let Some(local_offset) = args.local_offset {
        config.local_offset = local_offset;
    }
    if args.dry_run {
        config.dry_run = true;
    }

    config
        .sites
        .merge(args.sites.iter().cloned().collect());
}

/// Print the end-of-run summary to stderr
pub fn generate_final_report(stats: &RunStats) {
    eprintln!();
    eprintln!("{}", "Hilltop Processing Summary".bright_green().bold());
    eprintln!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_secs_f64()
    );
    eprintln!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Observations:".bright_cyan(),
        stats.observations_delivered.to_string().bright_white().bold()
    );
    if stats.measurements_skipped > 0 {
        eprintln!(
            "  {} {}",
            "Measurements skipped:".bright_yellow(),
            stats.measurements_skipped.to_string().bright_yellow()
        );
    }
    if stats.files_failed > 0 {
        eprintln!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
}
