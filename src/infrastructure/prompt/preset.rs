//! Prompter answering from pre-seeded values
//!
//! Answers for keys given on the command line come from here; anything
//! else falls through to the wrapped prompter.

use std::collections::HashMap;

use crate::domain::ports::Prompter;
use crate::error::BannerResult;

pub struct PresetPrompter<'a> {
    answers: HashMap<String, String>,
    fallback: &'a dyn Prompter,
}

impl<'a> PresetPrompter<'a> {
    pub fn new(fallback: &'a dyn Prompter) -> Self {
        Self {
            answers: HashMap::new(),
            fallback,
        }
    }

    /// Pre-seed `key` when `value` is present
    pub fn with_answer(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.answers.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl Prompter for PresetPrompter<'_> {
    fn ask(&self, question: &str, key: &str) -> BannerResult<String> {
        match self.answers.get(key) {
            Some(answer) => Ok(answer.clone()),
            None => self.fallback.ask(question, key),
        }
    }
}
