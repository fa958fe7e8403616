//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The port traits take `&dyn Logger` arguments, which mockall matchers handle poorly
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they record without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
