//! Bird variants
//!
//! Each bird opts into the capabilities it actually has.

use crate::domain::ports::{Bird, Flyer, Logger, Swimmer};

/// Flies and swims
#[derive(Debug, Clone, Copy, Default)]
pub struct Duck;

impl Duck {
    /// Duck-only behavior, outside the `Bird` contract
    pub fn quack(&self, log: &dyn Logger) {
        log.info("I can quack");
    }
}

impl Bird for Duck {
    fn name(&self) -> &str {
        "Duck"
    }

    fn as_flyer(&self) -> Option<&dyn Flyer> {
        Some(self)
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        Some(self)
    }
}

impl Flyer for Duck {
    fn fly(&self, log: &dyn Logger) {
        log.info("I can fly");
    }
}

impl Swimmer for Duck {
    fn swim(&self, log: &dyn Logger) {
        log.info("I can swim");
    }
}

/// Swims only
#[derive(Debug, Clone, Copy, Default)]
pub struct Penguin;

impl Bird for Penguin {
    fn name(&self) -> &str {
        "Penguin"
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        Some(self)
    }
}

impl Swimmer for Penguin {
    fn swim(&self, log: &dyn Logger) {
        log.info("I can swim");
    }
}

/// Flies only
#[derive(Debug, Clone, Copy, Default)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn name(&self) -> &str {
        "Sparrow"
    }

    fn as_flyer(&self) -> Option<&dyn Flyer> {
        Some(self)
    }
}

impl Flyer for Sparrow {
    fn fly(&self, log: &dyn Logger) {
        log.info("I can fly high in the sky");
    }
}

/// Swims only
#[derive(Debug, Clone, Copy, Default)]
pub struct Swan;

impl Bird for Swan {
    fn name(&self) -> &str {
        "Swan"
    }

    fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        Some(self)
    }
}

impl Swimmer for Swan {
    fn swim(&self, log: &dyn Logger) {
        log.info("I can swim gracefully");
    }
}
