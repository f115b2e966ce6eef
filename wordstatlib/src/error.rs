//! Error types for wordstatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or analyzing a word list
#[derive(Error, Debug)]
pub enum WordstatError {
    /// Failed to read the word list
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The word list is not valid UTF-8
    #[error("file '{path}' is not valid UTF-8 text: {source}")]
    NotText {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// The directory of the running executable could not be determined
    #[error("cannot locate the executable directory: {0}")]
    ExecutableDir(std::io::Error),

    /// No words left after dropping empty lines
    #[error("no words found in {origin}")]
    EmptyInput { origin: String },
}

impl WordstatError {
    /// True for failures to obtain the source text.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::NotText { .. } | Self::ExecutableDir(_)
        )
    }

    /// True when the source held no words.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}
