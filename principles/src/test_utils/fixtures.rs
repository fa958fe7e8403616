//! Test fixtures
//!
//! Factory functions for the variant collections the demos use.

use crate::domain::entities::{
    BooleanQuestion, Duck, MultipleChoiceQuestion, Penguin, RangeQuestion, Sparrow, Swan,
    TextQuestion,
};
use crate::domain::ports::{Bird, Question};

/// One of each bird, in demo order
pub fn test_birds() -> Vec<Box<dyn Bird>> {
    vec![
        Box::new(Duck),
        Box::new(Penguin),
        Box::new(Sparrow),
        Box::new(Swan),
    ]
}

/// One of each question type
pub fn test_quiz() -> Vec<Box<dyn Question>> {
    vec![
        Box::new(BooleanQuestion::new("Is this a test?")),
        Box::new(
            MultipleChoiceQuestion::new("Pick a letter", ["A", "B"])
                .expect("fixture options are non-empty"),
        ),
        Box::new(RangeQuestion::new("How fast?").with_minimums(vec![10])),
        Box::new(TextQuestion::new("Why?")),
    ]
}
