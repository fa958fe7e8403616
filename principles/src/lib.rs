//! SOLID principles, one small domain each
//!
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: variants and the capability contracts they implement
//! - `adapters`: logger sinks and payment gateways
//! - `app`: services that dispatch to variants through their contracts
//! - `demos`: drivers that wire variants into services

pub mod adapters;
pub mod app;
pub mod config;
pub mod demos;
pub mod domain;
pub mod error;
pub mod logging;

#[cfg(test)]
mod test_utils;


pub use config::{Config, LogFormat, LogSink};
pub use domain::ports::Logger;
pub use error::{ConfigError, DomainError};
