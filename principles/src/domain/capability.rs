//! Capabilities
//!
//! A capability names an operation that some variants support and others
//! don't. Variants expose each capability through an accessor returning
//! `Option<&dyn Trait>`; dispatchers turn `None` into `NotSupported`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Fly,
    Swim,
    Move,
    Attack,
    TakeDamage,
    ReportHealth,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Fly,
        Capability::Swim,
        Capability::Move,
        Capability::Attack,
        Capability::TakeDamage,
        Capability::ReportHealth,
    ];
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Fly => write!(f, "fly"),
            Capability::Swim => write!(f, "swim"),
            Capability::Move => write!(f, "move"),
            Capability::Attack => write!(f, "attack"),
            Capability::TakeDamage => write!(f, "take damage"),
            Capability::ReportHealth => write!(f, "report health"),
        }
    }
}

/// Unwrap a capability accessor, or fail with `NotSupported` for `subject`
pub fn require<T>(
    found: Option<T>,
    subject: &str,
    capability: Capability,
) -> Result<T, DomainError> {
    found.ok_or_else(|| DomainError::not_supported(subject, capability))
}
