//! Dependency inversion: payments through injected processors

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting dependency_inversion demo");
    demos::dependency_inversion::run(adapters::logger_from_config(&config));

    Ok(())
}
