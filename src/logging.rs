use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::{PROJECT_NAME, project_data_dir};

/// Logger setup for the binary.
///
/// Prompts own the terminal while they run, so logs go to a file in the
/// project data directory when one is configured and to stderr otherwise.
#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Log to `file_name` inside the project data directory.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Raise the level filter from `Info` to `Debug`.
    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();
        // Dependencies stay quiet; only prompt sessions follow the debug flag
        b.filter_level(LevelFilter::Warn);
        b.filter_module(PROJECT_NAME, self.level());

        if let Some(file_name) = &self.file_name {
            let log_file = project_data_dir()?.join(file_name);
            let fd = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Unable to initialize logging")?;

        Ok(())
    }
}
