//! Open/closed: the quiz printer is closed to edits, open to new question types.

use std::sync::Arc;

use crate::app::{log_and_continue, QuizService};
use crate::domain::entities::{BooleanQuestion, MultipleChoiceQuestion, RangeQuestion, TextQuestion};
use crate::domain::ports::{Logger, Question};

pub fn run(log: Arc<dyn Logger>) {
    let mut questions: Vec<Box<dyn Question>> = vec![Box::new(BooleanQuestion::new(
        "Is learning SOLID Principles useful?",
    ))];

    let favourite = MultipleChoiceQuestion::new(
        "What is your favourite language?",
        ["CSS", "HTML", "JS", "PYTHON"],
    );
    if let Some(question) = log_and_continue(log.as_ref(), favourite) {
        questions.push(Box::new(question));
    }

    questions.push(Box::new(RangeQuestion::new(
        "What is the speed limit in your city?",
    )));
    questions.push(Box::new(TextQuestion::new(
        "What is the best project you have worked on?",
    )));

    QuizService::new(log).print_quiz(&questions);
}
