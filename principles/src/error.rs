//! Unified error types for the showcase
//!
//! This module defines error types for each layer:
//! - `DomainError`: Failures raised by variants and dispatchers
//! - `ConfigError`: Invalid environment configuration

use thiserror::Error;

use crate::domain::Capability;

/// Domain layer errors - raised by variants and the services that dispatch to them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The variant does not implement the requested capability
    #[error("{subject} cannot {capability}")]
    NotSupported {
        subject: String,
        capability: Capability,
    },

    /// A variant's own operation failed on purpose
    #[error("{0}")]
    SimulatedFailure(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_supported(subject: impl Into<String>, capability: Capability) -> Self {
        Self::NotSupported {
            subject: subject.into(),
            capability,
        }
    }

    pub fn simulated(reason: impl Into<String>) -> Self {
        Self::SimulatedFailure(reason.into())
    }

    /// The capability that was missing, if this is a `NotSupported` error
    pub fn missing_capability(&self) -> Option<Capability> {
        match self {
            Self::NotSupported { capability, .. } => Some(*capability),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
