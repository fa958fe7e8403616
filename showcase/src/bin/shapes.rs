//! Liskov substitution: growing rectangles and squares

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!("Starting liskov_shapes demo");
    demos::liskov_shapes::run(adapters::logger_from_config(&config));

    Ok(())
}
