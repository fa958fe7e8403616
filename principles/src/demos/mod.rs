//! Demo drivers
//!
//! Each demo wires concrete variants into a service and writes a fixed
//! sequence of lines to the injected logger.

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_birds;
pub mod liskov_shapes;
pub mod open_closed;
pub mod single_responsibility;

use std::sync::Arc;

use crate::domain::ports::Logger;

/// Run every demo in principle order
pub fn run_all(log: Arc<dyn Logger>) {
    single_responsibility::run(log.clone());
    open_closed::run(log.clone());
    liskov_shapes::run(log.clone());
    liskov_birds::run(log.clone());
    interface_segregation::run(log.clone());
    dependency_inversion::run(log);
}
