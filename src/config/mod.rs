mod loader;
pub use loader::{ChoiceSpec, PromptFile, PromptKind};

#[cfg(test)]
mod loader_tests;
