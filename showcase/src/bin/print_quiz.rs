//! Open/closed: printing a quiz of mixed question types

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting open_closed demo");
    demos::open_closed::run(adapters::logger_from_config(&config));

    Ok(())
}
