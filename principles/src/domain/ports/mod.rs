//! Domain ports (traits)
//!
//! Port traits define the contracts variants implement and the collaborators
//! the domain requires. Adapters and entities provide concrete implementations.

pub mod birds;
pub mod combat;
pub mod logger;
pub mod payment;
pub mod question;
pub mod shape;

pub use birds::{Bird, Flyer, Swimmer};
pub use combat::{Attacker, Damageable, GameEntity, Movable};
pub use logger::Logger;
pub use payment::PaymentProcessor;
pub use question::Question;
pub use shape::Shape;
