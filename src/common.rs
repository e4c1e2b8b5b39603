use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use log::debug;

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the project data directory, creating it if needed.
///
/// Returns: Path to `~/.local/share/termprompt` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!(
            "Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"
        )
    })?;

    let project_data_dir = data_dir.join(PROJECT_NAME);
    debug!("Using data directory: {}", project_data_dir.display());

    fs::create_dir_all(&project_data_dir).with_context(|| {
        format!(
            "Unable to create directory: {}",
            project_data_dir.display()
        )
    })?;

    Ok(project_data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_matches_package() {
        assert_eq!(PROJECT_NAME, "termprompt");
        assert!(!PROJECT_VERSION.is_empty());
    }

    #[test]
    fn test_project_data_dir_is_named_after_project() {
        let dir = project_data_dir().unwrap();

        assert!(dir.ends_with(PROJECT_NAME));
        assert!(dir.is_dir());
    }
}
