//! Entity service
//!
//! Dispatches movement, attacks and damage to game entities through their
//! capability accessors.

use std::sync::Arc;

use crate::domain::ports::{GameEntity, Logger};
use crate::domain::{require, Capability};
use crate::error::DomainError;

pub struct EntityService {
    log: Arc<dyn Logger>,
}

impl EntityService {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }

    pub fn move_entity(&self, entity: &dyn GameEntity) -> Result<(), DomainError> {
        let movable = require(entity.as_movable(), entity.name(), Capability::Move)?;
        movable.move_along(self.log.as_ref());
        Ok(())
    }

    pub fn attack(&self, entity: &dyn GameEntity) -> Result<(), DomainError> {
        let attacker = require(entity.as_attacker(), entity.name(), Capability::Attack)?;
        attacker.attack(self.log.as_ref());
        Ok(())
    }

    pub fn take_damage(
        &self,
        entity: &mut dyn GameEntity,
        damage: u32,
    ) -> Result<(), DomainError> {
        // The accessor borrows mutably, so the name is captured first
        let name = entity.name().to_string();
        let target = require(entity.as_damageable_mut(), &name, Capability::TakeDamage)?;
        target.take_damage(damage, self.log.as_ref());

        tracing::debug!(entity = %name, damage, health = target.health(), "Applied damage");
        Ok(())
    }

    pub fn health(&self, entity: &dyn GameEntity) -> Result<i32, DomainError> {
        let target = require(
            entity.as_damageable(),
            entity.name(),
            Capability::ReportHealth,
        )?;
        Ok(target.health())
    }
}
