//! Input options for a report run.
//!
//! The only knob is where the word list comes from. When no path is given the
//! list is looked up next to the running executable, not in the caller's
//! working directory.

use std::path::{Path, PathBuf};

use crate::error::WordstatError;
use crate::Result;

/// File name looked up next to the executable when no source is given.
pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Options for producing a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Explicit word list location (None = `words.txt` beside the executable)
    pub source_path: Option<PathBuf>,
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read words from `path` instead of the default location.
    pub fn source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Resolve the path the word list will be read from.
    pub fn resolve_source(&self) -> Result<PathBuf> {
        match &self.source_path {
            Some(path) => Ok(path.clone()),
            None => default_source_path(),
        }
    }
}

/// `words.txt` in the directory containing the running executable.
pub fn default_source_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(WordstatError::ExecutableDir)?;
    let dir = exe.parent().ok_or_else(|| {
        WordstatError::ExecutableDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("'{}' has no parent directory", exe.display()),
        ))
    })?;
    Ok(source_in(dir))
}

fn source_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_WORDS_FILE)
}
