mod common;
mod config;
mod error;
mod logging;
pub mod tui;

pub use common::{PROJECT_NAME, PROJECT_VERSION, project_data_dir};
pub use config::{ChoiceSpec, PromptFile, PromptKind};
pub use error::{PromptError, PromptResult};
pub use logging::Logging;
