//! Registry CLI - Replay Device Registry Calls
//!
//! Issues registry contract calls against a mock caller seeded from the
//! `[[fixtures]]` of the configuration file, and prints each
//! `{ "result": { "value": ... } }` envelope on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Typed calls
//! registry-cli register temperature-sensor city-center
//! registry-cli get 1
//! registry-cli set-status 1 inactive
//! registry-cli count
//!
//! # Any function, JSON arguments
//! registry-cli call get-device 1
//!
//! # Explicit config and verbose logging
//! registry-cli --config ./registry.toml -v count
//! RUST_LOG=debug registry-cli count
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use registry_core::{load_config, ConfigOverrides, DeviceRegistry, MockContractCaller};

/// Registry CLI - replay IoT device registry contract calls
#[derive(Parser, Debug)]
#[command(name = "registry-cli")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "REGISTRY_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Contract id (ADDRESS.contract-name)
    #[arg(long, value_name = "ID")]
    contract_id: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Registry operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a device
    Register {
        /// Device type (e.g. temperature-sensor)
        device_type: String,
        /// Deployment location
        location: String,
    },
    /// Fetch a device record
    Get {
        /// Device id
        id: u64,
    },
    /// Change a device status
    SetStatus {
        /// Device id
        id: u64,
        /// New status
        status: String,
    },
    /// Number of registered devices
    Count,
    /// Call any contract function with JSON arguments
    Call {
        /// Function name
        function: String,
        /// Arguments, one JSON literal each (bare words are strings)
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Initialize logging on stderr so stdout carries only results
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("registry_cli={level},registry_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let overrides = ConfigOverrides {
        config_path: args.config.clone(),
        contract_id: args.contract_id.clone(),
        ..ConfigOverrides::default()
    };
    let (config, source) = load_config(&overrides).context("Failed to load configuration")?;
    info!(source = ?source, fixtures = config.fixtures.len(), "Using configuration");

    let mock = MockContractCaller::from_fixtures(&config.fixtures)
        .context("Failed to seed mock from fixtures")?;
    let registry = DeviceRegistry::with_contract(mock, config.contract.id.clone());

    let response = commands::run(&registry, &args.command).await?;
    let json = serde_json::to_string_pretty(&response)?;
    println!("{json}");

    Ok(())
}
