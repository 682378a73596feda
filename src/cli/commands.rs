//! Command implementation for the registry compiler CLI.
//!
//! Orchestrates the full run: two concurrent fetch-and-parse pipelines, one
//! per source, joined before reconciliation; then the merge and the registry
//! rewrite. All-or-nothing: a failure in either pipeline aborts the run
//! before anything is written.

use crate::app::services::{fetcher, noaa_parser, ourairports_parser, reconciler, registry_writer};
use crate::cli::args::Args;
use crate::{Config, Result, Station};
use colored::Colorize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics reported after a successful run
#[derive(Debug, Clone, Default)]
pub struct UpdateStats {
    /// Records retained from the primary (NOAA) source
    pub primary_stations: usize,
    /// Records retained from the secondary (OurAirports) source
    pub secondary_stations: usize,
    /// Records in the reconciled registry
    pub records_written: usize,
    /// Total run time
    pub elapsed: Duration,
    /// Whether the registry file was actually rewritten
    pub dry_run: bool,
}

/// Run the registry compilation end to end.
pub async fn run(args: Args) -> Result<UpdateStats> {
    let start_time = Instant::now();

    setup_logging(&args);
    args.validate()?;

    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, &args);
    config.validate()?;

    info!("Starting registry compilation");
    debug!("Configuration: {:?}", config);

    let (primary, secondary) = fetch_and_parse_sources(&config).await?;
    let stats = compile_and_write(&config, &primary, &secondary, args.dry_run)?;

    let stats = UpdateStats {
        primary_stations: primary.len(),
        secondary_stations: secondary.len(),
        elapsed: start_time.elapsed(),
        ..stats
    };

    report_summary(&stats, &config);
    Ok(stats)
}

/// Fetch and parse both sources as independent concurrent tasks.
///
/// The join point waits for both tasks even when one fails early; only after
/// both resolve are the results inspected, so a fast task's success is never
/// acted on before the slow task settles.
async fn fetch_and_parse_sources(
    config: &Config,
) -> Result<(HashMap<String, Station>, HashMap<String, Station>)> {
    let client = reqwest::Client::new();
    let timeout = config.fetch_timeout();

    let primary_task = tokio::spawn({
        let client = client.clone();
        let url = config.primary_url.clone();
        async move {
            let body = fetcher::fetch(&client, &url, timeout).await?;
            noaa_parser::parse(&url, &body)
        }
    });

    let secondary_task = tokio::spawn({
        let client = client.clone();
        let url = config.secondary_url.clone();
        async move {
            let body = fetcher::fetch(&client, &url, timeout).await?;
            ourairports_parser::parse(&url, &body)
        }
    });

    let (primary_result, secondary_result) = tokio::join!(primary_task, secondary_task);
    let primary = primary_result??;
    let secondary = secondary_result??;

    info!(
        "Sources parsed: {} primary stations, {} secondary stations",
        primary.len(),
        secondary.len()
    );
    Ok((primary, secondary))
}

/// Reconcile the two maps and rewrite the registry data section.
fn compile_and_write(
    config: &Config,
    primary: &HashMap<String, Station>,
    secondary: &HashMap<String, Station>,
    dry_run: bool,
) -> Result<UpdateStats> {
    let merged = reconciler::merge(primary, secondary);

    let records_written = if dry_run {
        info!(
            "Dry run: {} records would be written to {}",
            merged.len(),
            config.output_path.display()
        );
        merged.len()
    } else {
        registry_writer::write_registry(&config.output_path, &config.marker, &merged)?
    };

    Ok(UpdateStats {
        records_written,
        dry_run,
        ..Default::default()
    })
}

/// Print the human-readable run summary.
fn report_summary(stats: &UpdateStats, config: &Config) {
    let action = if stats.dry_run {
        "would be updated (dry run)"
    } else {
        "updated"
    };
    println!(
        "\n {} records {} in {:.3} sec.",
        stats.records_written.to_string().green().bold(),
        action,
        stats.elapsed.as_secs_f64()
    );
    if !stats.dry_run {
        println!(
            " registry data section rewritten in {}\n",
            config.output_path.display()
        );
    }
}

/// Set up structured logging from the CLI verbosity flags.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_stations={}", args.get_log_level())));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

/// Apply CLI argument overrides on top of the loaded configuration.
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(url) = &args.primary_url {
        config.primary_url = url.clone();
    }
    if let Some(url) = &args.secondary_url {
        config.secondary_url = url.clone();
    }
    if let Some(path) = &args.output_path {
        config.output_path = path.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }
    if let Some(timeout) = args.timeout_secs {
        config.fetch_timeout_secs = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

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
    fn test_cli_overrides_replace_config_values() {
        let mut config = Config::default();
        let mut cli = args();
        cli.primary_url = Some("https://example.test/stations.txt".to_string());
        cli.output_path = Some(PathBuf::from("/tmp/registry.go"));
        cli.timeout_secs = Some(42);

        apply_cli_overrides(&mut config, &cli);
        assert_eq!(config.primary_url, "https://example.test/stations.txt");
        assert_eq!(config.output_path, PathBuf::from("/tmp/registry.go"));
        assert_eq!(config.fetch_timeout_secs, 42);
        // Untouched values keep their defaults
        assert!(config.secondary_url.contains("airports.csv"));
    }

    #[test]
    fn test_dry_run_skips_registry_write() {
        let config = Config {
            output_path: PathBuf::from("/nonexistent/registry.go"),
            ..Config::default()
        };
        let station = Station {
            icao: "PANC".to_string(),
            name: "Anchorage".to_string(),
            iata: "ANC".to_string(),
            country: "US".to_string(),
            latitude: 61.17,
            longitude: -150.0,
        };
        let primary: HashMap<String, Station> =
            [("PANC".to_string(), station)].into_iter().collect();
        let secondary = HashMap::new();

        // Would fail with RegistryIo if the write were attempted
        let stats = compile_and_write(&config, &primary, &secondary, true).unwrap();
        assert_eq!(stats.records_written, 1);
        assert!(stats.dry_run);
    }
}
