//! Textual rendering of [`WordStats`].
//!
//! A report is a pure presentation layer: it turns computed statistics into
//! lines in a fixed order and never touches the word list itself.
//!
//! ```text
//! number of words: 3
//! longest word: apple
//! length of longest word: 5
//! shortest word: cat
//! length of shortest word: 3
//! number of words at length 5 : 1
//! number of words at length 4 : 0
//! ...
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::stats::WordStats;

/// Fully computed report, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    stats: WordStats,
}

impl Report {
    pub fn new(stats: WordStats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &WordStats {
        &self.stats
    }

    /// One line per fact: count, longest, shortest, then the histogram from
    /// the longest length down to 1.
    pub fn lines(&self) -> Vec<String> {
        let stats = &self.stats;
        let mut lines = vec![
            format!("number of words: {}", stats.count),
            format!("longest word: {}", stats.longest.word),
            format!("length of longest word: {}", stats.longest.length),
            format!("shortest word: {}", stats.shortest.word),
            format!("length of shortest word: {}", stats.shortest.length),
        ];
        lines.extend(
            stats
                .histogram
                .iter()
                .map(|b| format!("number of words at length {} : {}", b.length, b.count)),
        );
        lines
    }

    /// Write every line, each terminated by `\n`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl From<WordStats> for Report {
    fn from(stats: WordStats) -> Self {
        Self::new(stats)
    }
}
