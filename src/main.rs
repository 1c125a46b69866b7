//! site-monitor - periodic HTTP uptime checks with email alerts

use clap::Parser;
use site_monitor::monitoring::LogChannel;
use site_monitor::shutdown::spawn_shutdown_listener;
use site_monitor::utils::logging::init_logging;
use site_monitor::{Config, Monitor, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Probe HTTP endpoints on a fixed cadence and email an operator on failure
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (YAML); the environment alone is used when absent
    #[arg(short, long, value_name = "FILE", env = "SITE_MONITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Log alerts instead of sending them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            // Logging is not set up yet
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match &cli.config {
        Some(path) => info!("Configuration loaded from {:?}", path),
        None => info!("Configuration loaded from the environment"),
    }
    debug!("Effective configuration: {:?}", config.monitor);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let monitor = if cli.dry_run {
        info!("Dry run: alerts will be logged, not emailed");
        Monitor::with_channel(config, Arc::new(LogChannel))?
    } else {
        Monitor::new(config)?
    };

    if cli.once {
        let report = monitor.run_once().await;
        info!(
            "Single cycle done: {} of {} URLs failed",
            report.failures().len(),
            report.probed()
        );
        return Ok(());
    }

    monitor.run(spawn_shutdown_listener()).await;
    Ok(())
}
