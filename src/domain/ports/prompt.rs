//! Prompt Port
//!
//! Source of operator answers. `key` identifies the answer independently of
//! the wording of `question`, so answers can be pre-seeded.

use crate::error::BannerResult;

pub trait Prompter {
    /// Ask the operator one free-form question
    fn ask(&self, question: &str, key: &str) -> BannerResult<String>;
}
