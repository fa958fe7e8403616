//! Game entity capabilities
//!
//! Movement, attacking and taking damage are independent traits with provided
//! bodies. An entity opts into one with an empty `impl` block and returns
//! itself from the matching accessor on `GameEntity`. Entities never carry
//! stubs for capabilities they lack.

use crate::domain::capability::Capability;
use crate::domain::ports::Logger;

pub trait GameEntity {
    fn name(&self) -> &str;

    fn as_movable(&self) -> Option<&dyn Movable> {
        None
    }

    fn as_attacker(&self) -> Option<&dyn Attacker> {
        None
    }

    fn as_damageable(&self) -> Option<&dyn Damageable> {
        None
    }

    fn as_damageable_mut(&mut self) -> Option<&mut dyn Damageable> {
        None
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Move => self.as_movable().is_some(),
            Capability::Attack => self.as_attacker().is_some(),
            Capability::TakeDamage | Capability::ReportHealth => self.as_damageable().is_some(),
            _ => false,
        }
    }

    /// Every capability this entity supports, in declaration order
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|c| self.supports(*c))
            .collect()
    }
}

pub trait Movable: GameEntity {
    fn move_along(&self, log: &dyn Logger) {
        log.info(&format!("{} is moving", self.name()));
    }
}

pub trait Attacker: GameEntity {
    fn attack(&self, log: &dyn Logger) {
        log.info(&format!("{} is attacking", self.name()));
    }
}

pub trait Damageable: GameEntity {
    fn health(&self) -> i32;

    fn health_mut(&mut self) -> &mut i32;

    /// Damage is unsigned, so it can never heal. Health may go below zero.
    fn take_damage(&mut self, damage: u32, log: &dyn Logger) {
        let health = self.health_mut();
        *health = health.saturating_sub_unsigned(damage);
        log.info(&format!("{} took {} damage", self.name(), damage));
    }
}
