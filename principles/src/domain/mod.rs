//! Domain layer
//!
//! Contains the variants and the contracts they implement, with no I/O.
//! - `capability`: Named operations a variant may lack
//! - `entities`: Concrete variants (birds, shapes, questions, game entities)
//! - `ports`: Trait definitions for capabilities and external collaborators

pub mod capability;
pub mod entities;
pub mod ports;

pub use capability::{require, Capability};
