//! Bird service
//!
//! Makes any bird fly or swim. A bird that lacks the capability yields
//! `NotSupported`, which is returned to the caller untouched.

use std::sync::Arc;

use crate::domain::ports::{Bird, Logger};
use crate::domain::{require, Capability};
use crate::error::DomainError;

pub struct BirdService {
    log: Arc<dyn Logger>,
}

impl BirdService {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }

    pub fn fly(&self, bird: &dyn Bird) -> Result<(), DomainError> {
        tracing::debug!(bird = bird.name(), "Dispatching fly");
        let flyer = require(bird.as_flyer(), bird.name(), Capability::Fly)?;
        flyer.fly(self.log.as_ref());
        Ok(())
    }

    pub fn swim(&self, bird: &dyn Bird) -> Result<(), DomainError> {
        tracing::debug!(bird = bird.name(), "Dispatching swim");
        let swimmer = require(bird.as_swimmer(), bird.name(), Capability::Swim)?;
        swimmer.swim(self.log.as_ref());
        Ok(())
    }
}
