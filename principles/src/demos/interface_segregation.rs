//! Interface segregation: entities compose only the capabilities they use.

use std::sync::Arc;

use crate::app::{log_and_continue, EntityService};
use crate::domain::entities::{Character, Turret, Vehicle};
use crate::domain::ports::Logger;

pub fn run(log: Arc<dyn Logger>) {
    let service = EntityService::new(log.clone());
    let recover = |result| log_and_continue(log.as_ref(), result);

    let mut character = Character::new();
    recover(service.move_entity(&character));
    recover(service.attack(&character));
    recover(service.take_damage(&mut character, 20));
    if let Some(health) = log_and_continue(log.as_ref(), service.health(&character)) {
        log.info(&format!("Character health: {}", health));
    }

    let mut turret = Turret::new();
    recover(service.attack(&turret));
    recover(service.take_damage(&mut turret, 30));
    if let Some(health) = log_and_continue(log.as_ref(), service.health(&turret)) {
        log.info(&format!("Turret health: {}", health));
    }

    let mut vehicle = Vehicle;
    recover(service.move_entity(&vehicle));
    recover(service.attack(&vehicle));
    recover(service.take_damage(&mut vehicle, 10));
    log_and_continue(log.as_ref(), service.health(&vehicle));
}
