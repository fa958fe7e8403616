//! Quiz question contract
//!
//! The quiz printer only knows this trait. New question types plug in by
//! implementing `choices`.

use crate::domain::ports::Logger;

pub trait Question {
    fn description(&self) -> &str;

    /// The lines shown under the description
    fn choices(&self) -> Vec<String>;

    fn render_choices(&self, log: &dyn Logger) {
        for choice in self.choices() {
            log.info(&choice);
        }
    }
}
