//! # wordstatlib
//!
//! Descriptive statistics over a newline-delimited word list.
//!
//! ## Overview
//!
//! Given a word list, the library computes:
//!
//! - **Count**: number of non-empty lines
//! - **Longest**: the first word with the maximum length
//! - **Shortest**: the first word with the minimum length
//! - **Histogram**: words per length, from the maximum length down to 1,
//!   including lengths with no words
//!
//! Lines are split on `\n` only and empty lines are skipped. Words are not
//! trimmed or case-folded. Lengths count characters, not bytes.
//!
//! ## Features
//!
//! - **Pure data types**: `WordStats` is plain, serializable data
//! - **No partial output**: errors surface before a `Report` exists
//! - **Testable sources**: analyze files or in-memory text
//!
//! ## Example
//!
//! ```rust
//! use wordstatlib::{analyze_str, Report};
//!
//! let stats = analyze_str("cat\ndog\napple\n").unwrap();
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.longest.word, "apple");
//! assert_eq!(stats.histogram.count_at(3), 2);
//!
//! let report = Report::new(stats);
//! assert_eq!(report.lines()[1], "longest word: apple");
//! ```

pub mod analyzer;
pub mod error;
pub mod options;
pub mod report;
pub mod stats;
pub mod wordlist;

pub use analyzer::{analyze_file, analyze_str, run};
pub use error::WordstatError;
pub use options::{default_source_path, ReportOptions, DEFAULT_WORDS_FILE};
pub use report::Report;
pub use stats::{
    longest_word, shortest_word, word_length, LengthBucket, LengthHistogram, WordEntry, WordStats,
};
pub use wordlist::WordList;

/// Result type for wordstatlib operations
pub type Result<T> = std::result::Result<T, WordstatError>;
