//! Loading word lists.
//!
//! A word list is newline-delimited text. Lines are split on `\n` only and
//! empty entries are dropped; nothing else is trimmed or normalized, so a
//! trailing `\r` or inner space stays part of the word.

use std::path::Path;

use log::debug;

use crate::error::WordstatError;
use crate::Result;

/// Non-empty words in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Split `text` on newlines and keep the non-empty entries.
    ///
    /// ```rust
    /// use wordstatlib::WordList;
    ///
    /// let list = WordList::parse("cat\ndog\n\napple\n");
    /// assert_eq!(list.as_slice(), ["cat", "dog", "apple"]);
    /// ```
    pub fn parse(text: &str) -> Self {
        let words = text
            .split('\n')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// Read the whole file at `path` and parse it.
    ///
    /// The file is read in one call and closed before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| WordstatError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| WordstatError::NotText {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text);
        debug!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    /// Collect words, dropping empty ones the same way `parse` does.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { words }
    }
}
