//! Logger adapters
//!
//! Concrete sinks for the `Logger` port.

pub mod stream_logger;
pub mod tracing_logger;

pub use stream_logger::StreamLogger;
pub use tracing_logger::TracingLogger;
