//! Application layer
//!
//! Services dispatch operations to variants through their contracts only.
//! They never inspect a variant's concrete type.

pub mod bird_service;
pub mod calorie_service;
pub mod entity_service;
pub mod payment_service;
pub mod quiz_service;
pub mod recovery;
pub mod shape_service;

pub use bird_service::BirdService;
pub use calorie_service::CalorieService;
pub use entity_service::EntityService;
pub use payment_service::{PaymentOutcome, PaymentService};
pub use quiz_service::QuizService;
pub use recovery::log_and_continue;
pub use shape_service::ShapeService;
