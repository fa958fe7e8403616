//! Single responsibility: the tracker counts, the service reports.

use std::sync::Arc;

use crate::app::{log_and_continue, CalorieService};
use crate::domain::entities::CalorieTaker;
use crate::domain::ports::Logger;

pub const DAILY_LIMIT: u32 = 2000;

pub fn run(log: Arc<dyn Logger>) {
    let Some(taker) = log_and_continue(log.as_ref(), CalorieTaker::new(DAILY_LIMIT)) else {
        return;
    };
    let mut service = CalorieService::new(taker, log);

    service.track(200);
    service.track(1000);
    service.track(1000);
}
