//! Domain entities
//!
//! Concrete variants of the domain contracts, plus the log message value.

pub mod bird;
pub mod calorie;
pub mod combatant;
pub mod log_message;
pub mod question;
pub mod shape;

pub use bird::{Duck, Penguin, Sparrow, Swan};
pub use calorie::{CalorieTaker, Overrun};
pub use combatant::{Character, Turret, Vehicle, FULL_HEALTH};
pub use log_message::{LogMessage, Severity};
pub use question::{BooleanQuestion, MultipleChoiceQuestion, RangeQuestion, TextQuestion};
pub use shape::{Rectangle, Square};
