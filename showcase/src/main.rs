//! SOLID Showcase
//!
//! Runs every principle demo in order:
//! - Single responsibility (calorie tracking)
//! - Open/closed (quiz printing)
//! - Liskov substitution (shapes, then birds)
//! - Interface segregation (game entities)
//! - Dependency inversion (payment processing)

use anyhow::Result;
use solid_principles::{adapters, demos, logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config);

    tracing::info!(sink = ?config.log_sink, format = ?config.log_format, "Starting SOLID showcase");

    demos::run_all(adapters::logger_from_config(&config));

    Ok(())
}
