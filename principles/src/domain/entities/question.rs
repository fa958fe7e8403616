//! Quiz question variants

use crate::domain::ports::Question;
use crate::error::DomainError;

/// Minimum thresholds offered by a range question unless overridden
pub const DEFAULT_RANGE_MINIMUMS: [u32; 4] = [60, 80, 100, 140];

/// Prompt printed under a free-text question
pub const TEXT_ANSWER_PROMPT: &str = "Ans: _____________";

fn numbered<I, T>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

/// True/false question
#[derive(Debug, Clone)]
pub struct BooleanQuestion {
    description: String,
}

impl BooleanQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for BooleanQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        numbered(["True", "False"])
    }
}

#[derive(Debug, Clone)]
pub struct MultipleChoiceQuestion {
    description: String,
    options: Vec<String>,
}

impl MultipleChoiceQuestion {
    /// Fails when no options are given
    pub fn new<I, S>(description: impl Into<String>, options: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(DomainError::Validation(
                "A multiple choice question needs at least one option".to_string(),
            ));
        }

        Ok(Self {
            description: description.into(),
            options,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Question for MultipleChoiceQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        numbered(&self.options)
    }
}

/// Free-text question
#[derive(Debug, Clone)]
pub struct TextQuestion {
    description: String,
}

impl TextQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for TextQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec![TEXT_ANSWER_PROMPT.to_string()]
    }
}

#[derive(Debug, Clone)]
pub struct RangeQuestion {
    description: String,
    minimums: Vec<u32>,
}

impl RangeQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            minimums: DEFAULT_RANGE_MINIMUMS.to_vec(),
        }
    }

    pub fn with_minimums(mut self, minimums: Vec<u32>) -> Self {
        self.minimums = minimums;
        self
    }
}

impl Question for RangeQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        numbered(self.minimums.iter().map(|min| format!("Min {}", min)))
    }
}
