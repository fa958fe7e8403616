//! Liskov substitution: birds that fly, swim, or both

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting liskov_birds demo");
    demos::liskov_birds::run(adapters::logger_from_config(&config));

    Ok(())
}
