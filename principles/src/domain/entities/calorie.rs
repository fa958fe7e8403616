//! Calorie tracking
//!
//! `CalorieTaker` only counts. Reporting an overrun is someone else's job.

use crate::error::DomainError;

/// The running total went past the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overrun {
    pub max_calories: u32,
    pub current_calories: u32,
}

impl std::fmt::Display for Overrun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Maximum calorie count of {} exceeded! -> {}",
            self.max_calories, self.current_calories
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalorieTaker {
    max_calories: u32,
    current_calories: u32,
}

impl CalorieTaker {
    pub fn new(max_calories: u32) -> Result<Self, DomainError> {
        if max_calories == 0 {
            return Err(DomainError::Validation(
                "Maximum calories must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            max_calories,
            current_calories: 0,
        })
    }

    pub fn max_calories(&self) -> u32 {
        self.max_calories
    }

    pub fn current_calories(&self) -> u32 {
        self.current_calories
    }

    /// Add `calories` to the total; returns an overrun while the total is past the limit
    pub fn track(&mut self, calories: u32) -> Option<Overrun> {
        self.current_calories = self.current_calories.saturating_add(calories);

        (self.current_calories > self.max_calories).then_some(Overrun {
            max_calories: self.max_calories,
            current_calories: self.current_calories,
        })
    }
}
