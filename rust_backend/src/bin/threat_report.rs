//! Threat report binary
//!
//! Loads a department configuration, simulates department scores and prints
//! the aggregated company report as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Search threat.toml in the default locations
//! cargo run --bin threat-report
//!
//! # Explicit configuration file
//! cargo run --bin threat-report -- path/to/threat.toml
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kata_rust::config::ThreatConfig;
use kata_rust::threat::ThreatSimulator;

fn main() -> anyhow::Result<()> {
    // Library code logs through `log`; the subscriber bridges those records too
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => ThreatConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => ThreatConfig::from_default_location()
            .context("Failed to load config from default location")?,
    };

    info!(
        "Simulating {} departments (seed: {:?})",
        config.departments.len(),
        config.sampling.seed
    );

    let report = ThreatSimulator::from_config(&config)
        .simulate(&config)
        .context("Threat simulation failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
