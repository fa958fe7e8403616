//! Quiz service
//!
//! Prints any list of questions. Adding a question type never touches this file.

use std::sync::Arc;

use crate::domain::ports::{Logger, Question};

pub struct QuizService {
    log: Arc<dyn Logger>,
}

impl QuizService {
    pub fn new(log: Arc<dyn Logger>) -> Self {
        Self { log }
    }

    /// Description, then choices, then a blank line, for each question
    pub fn print_quiz(&self, questions: &[Box<dyn Question>]) {
        for question in questions {
            self.log.info(question.description());
            question.render_choices(self.log.as_ref());
            self.log.info("");
        }
    }
}
