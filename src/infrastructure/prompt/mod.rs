//! Prompter implementations

mod interactive;
mod preset;

pub use interactive::DialoguerPrompter;
pub use preset::PresetPrompter;
