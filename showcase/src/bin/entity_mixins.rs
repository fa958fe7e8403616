//! Interface segregation: entities composed from capabilities

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting interface_segregation demo");
    demos::interface_segregation::run(adapters::logger_from_config(&config));

    Ok(())
}
