//! SignSpeak - sign language translation app
//!
//! Opens the app window, or runs a scenario headless with `--headless`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use signspeak::cli::Cli;
use signspeak::collab::Collaborators;
use signspeak::config::AppConfig;
use signspeak::scenario::{run_headless, Scenario};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose wins over RUST_LOG
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new(cli.default_filter())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| cli.default_filter().into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SignSpeak");

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let scenario = cli
        .scenario
        .as_ref()
        .map(|path| {
            Scenario::load(path).with_context(|| format!("loading scenario from {}", path.display()))
        })
        .transpose()?;

    match scenario {
        Some(scenario) if cli.headless => {
            let report = run_headless(scenario, config, Collaborators::headless())
                .context("running headless scenario")?;
            if !report.passed() {
                bail!(
                    "scenario '{}' failed (exit code {}): {:?}",
                    report.name,
                    report.exit_code,
                    report.failures
                );
            }
            info!("Scenario '{}' passed", report.name);
            Ok(())
        }
        scenario => signspeak::ui::run(config, scenario)
            .map_err(|e| anyhow::anyhow!("window error: {}", e)),
    }
}
