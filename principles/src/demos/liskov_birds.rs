//! Liskov substitution with birds: every bird goes through the same calls,
//! and the ones that can't fly or swim say so.

use std::sync::Arc;

use crate::app::{log_and_continue, BirdService};
use crate::domain::entities::{Duck, Penguin, Sparrow, Swan};
use crate::domain::ports::{Bird, Logger};

pub fn run(log: Arc<dyn Logger>) {
    let service = BirdService::new(log.clone());
    let birds: [&dyn Bird; 4] = [&Duck, &Penguin, &Sparrow, &Swan];

    for (i, bird) in birds.into_iter().enumerate() {
        if i > 0 {
            log.info("");
        }
        log.info(&format!("{}:", bird.name()));
        log_and_continue(log.as_ref(), service.fly(bird));
        log_and_continue(log.as_ref(), service.swim(bird));
    }
}
