//! Single responsibility: calorie tracking

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting single_responsibility demo");
    demos::single_responsibility::run(adapters::logger_from_config(&config));

    Ok(())
}
