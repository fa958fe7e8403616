//! Game entity variants
//!
//! - `Character`: moves, attacks and takes damage
//! - `Turret`: attacks and takes damage
//! - `Vehicle`: moves only, and has no health at all

use crate::domain::ports::{Attacker, Damageable, GameEntity, Movable};

/// Starting health of every damageable entity
pub const FULL_HEALTH: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    health: i32,
}

impl Character {
    pub fn new() -> Self {
        Self {
            health: FULL_HEALTH,
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEntity for Character {
    fn name(&self) -> &str {
        "Character"
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        Some(self)
    }

    fn as_attacker(&self) -> Option<&dyn Attacker> {
        Some(self)
    }

    fn as_damageable(&self) -> Option<&dyn Damageable> {
        Some(self)
    }

    fn as_damageable_mut(&mut self) -> Option<&mut dyn Damageable> {
        Some(self)
    }
}

impl Movable for Character {}

impl Attacker for Character {}

impl Damageable for Character {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turret {
    health: i32,
}

impl Turret {
    pub fn new() -> Self {
        Self {
            health: FULL_HEALTH,
        }
    }
}

impl Default for Turret {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEntity for Turret {
    fn name(&self) -> &str {
        "Turret"
    }

    fn as_attacker(&self) -> Option<&dyn Attacker> {
        Some(self)
    }

    fn as_damageable(&self) -> Option<&dyn Damageable> {
        Some(self)
    }

    fn as_damageable_mut(&mut self) -> Option<&mut dyn Damageable> {
        Some(self)
    }
}

impl Attacker for Turret {}

impl Damageable for Turret {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vehicle;

impl GameEntity for Vehicle {
    fn name(&self) -> &str {
        "Vehicle"
    }

    fn as_movable(&self) -> Option<&dyn Movable> {
        Some(self)
    }
}

impl Movable for Vehicle {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Capability;
    use crate::test_utils::CapturingLogger;

    #[test]
    fn capability_sets() {
        assert_eq!(
            Character::new().capabilities(),
            vec![
                Capability::Move,
                Capability::Attack,
                Capability::TakeDamage,
                Capability::ReportHealth
            ]
        );
        assert_eq!(
            Turret::new().capabilities(),
            vec![
                Capability::Attack,
                Capability::TakeDamage,
                Capability::ReportHealth
            ]
        );
        assert_eq!(Vehicle.capabilities(), vec![Capability::Move]);
    }

    #[test]
    fn damage_reduces_health() {
        let log = CapturingLogger::new();
        let mut turret = Turret::new();

        turret.take_damage(30, &log);

        assert_eq!(turret.health(), 70);
        assert_eq!(log.infos(), vec!["Turret took 30 damage"]);
    }

    #[test]
    fn health_query_is_idempotent() {
        let mut character = Character::new();
        character.take_damage(20, &CapturingLogger::new());

        assert_eq!(character.health(), 80);
        assert_eq!(character.health(), 80);
    }

    #[test]
    fn health_can_drop_below_zero() {
        let mut character = Character::new();
        character.take_damage(150, &CapturingLogger::new());

        assert_eq!(character.health(), -50);
    }

    #[test]
    fn shared_bodies_use_entity_name() {
        let log = CapturingLogger::new();

        Vehicle.move_along(&log);
        Character::new().attack(&log);

        assert_eq!(log.infos(), vec!["Vehicle is moving", "Character is attacking"]);
    }
}
