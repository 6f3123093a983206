// src/main.rs
use clap::Parser;
use crtscan::cli::{Cli, OutputFormat};
use crtscan::config::Config;
use crtscan::crtsh::CrtShClient;
use crtscan::output::{csv, human, json, OutputManager};
use crtscan::probe::HttpProber;
use crtscan::progress::ProbeProgress;
use crtscan::report::build_report;
use crtscan::stats::StatsCollector;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Load config file (optional; defaults when absent)
    let mut config = Config::load_or_default(Path::new(&cli.config))?;

    // Apply CLI overrides
    if cli.include_expired {
        config.crtsh.exclude_expired = false;
    }

    if let Some(timeout) = cli.probe_timeout {
        config.probe.timeout_secs = timeout;
    }

    if cli.no_probe {
        config.probe.enabled = false;
    }

    // Initialize logging
    let log_level = cli.log_level().unwrap_or(config.logging.level.as_str());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Checking {} at crt.sh", cli.url);

    // Fetch certificate sightings; a failed query aborts the run
    let client = CrtShClient::new(&config.crtsh)?;
    let entries = client.search(&cli.url).await?;
    tracing::info!("Fetched {} certificate entries", entries.len());

    // Build the prober
    let prober = if config.probe.enabled {
        HttpProber::new(&config.probe)?
    } else {
        tracing::info!("HTTP probing disabled");
        HttpProber::disabled()
    };

    // Create stats collector and progress indicator
    let stats = StatsCollector::new();
    let progress = ProbeProgress::new(cli.should_show_progress() && prober.is_enabled());

    // Fetch → probe → dedupe
    let rows = build_report(&entries, &prober, cli.duplicates, &stats, &progress).await;

    // Create output manager
    let mut output_manager = OutputManager::new();

    // Add output handler based on format
    match cli.output_format() {
        OutputFormat::Human => {
            if let Some(ref path) = cli.output {
                let file = std::fs::File::create(path)?;
                output_manager.add_handler(Arc::new(human::HumanOutput::to_file(file)));
                tracing::info!("Writing report to: {}", path);
            } else {
                output_manager.add_handler(Arc::new(human::HumanOutput::new()));
            }
        }
        OutputFormat::Json => {
            if let Some(ref path) = cli.output {
                let file = std::fs::File::create(path)?;
                output_manager.add_handler(Arc::new(json::JsonOutput::to_file(file)));
                tracing::info!("Writing JSON output to: {}", path);
            } else {
                output_manager.add_handler(Arc::new(json::JsonOutput::new()));
            }
        }
        OutputFormat::Csv => {
            if let Some(ref path) = cli.output {
                let file = std::fs::File::create(path)?;
                output_manager.add_handler(Arc::new(csv::CsvOutput::to_file(file)));
                tracing::info!("Writing CSV output to: {}", path);
            } else {
                output_manager.add_handler(Arc::new(csv::CsvOutput::new()));
            }
        }
    }

    // Render the report
    output_manager.emit(&rows).await?;
    output_manager.flush().await?;

    // Print final stats if requested
    if cli.stats {
        eprintln!("{}", stats.format_stats());
    }

    Ok(())
}
