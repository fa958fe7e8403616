//! Calorie service
//!
//! Feeds a `CalorieTaker` and reports overruns. Counting and reporting stay
//! in separate types.

use std::sync::Arc;

use crate::domain::entities::CalorieTaker;
use crate::domain::ports::Logger;

pub struct CalorieService {
    taker: CalorieTaker,
    log: Arc<dyn Logger>,
}

impl CalorieService {
    pub fn new(taker: CalorieTaker, log: Arc<dyn Logger>) -> Self {
        Self { taker, log }
    }

    pub fn track(&mut self, calories: u32) {
        if let Some(overrun) = self.taker.track(calories) {
            self.log.info(&overrun.to_string());
        }
    }

    pub fn taker(&self) -> &CalorieTaker {
        &self.taker
    }
}
