//! High-level analysis API.
//!
//! Entry points that go from a source (file, text, or options) to
//! [`WordStats`] or a ready-to-print [`Report`]. Every error is raised before
//! a report exists, so callers never see a partial result.

use std::path::Path;

use log::debug;

use crate::options::ReportOptions;
use crate::report::Report;
use crate::stats::WordStats;
use crate::wordlist::WordList;
use crate::Result;

/// Produce the report for the source named by `options`.
///
/// # Example
///
/// ```rust
/// use wordstatlib::{run, ReportOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("words.txt");
/// fs::write(&path, "cat\ndog\napple\n").unwrap();
///
/// let report = run(&ReportOptions::new().source_path(&path)).unwrap();
/// assert_eq!(report.lines()[0], "number of words: 3");
/// ```
pub fn run(options: &ReportOptions) -> Result<Report> {
    let path = options.resolve_source()?;
    debug!("reading word list from {}", path.display());
    analyze_file(&path).map(Report::from)
}

/// Load a word list file and compute its statistics.
///
/// # Example
///
/// ```rust
/// use wordstatlib::analyze_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("words.txt");
/// fs::write(&path, "hi\n").unwrap();
///
/// let stats = analyze_file(&path).unwrap();
/// assert_eq!(stats.longest.word, "hi");
/// ```
pub fn analyze_file(path: impl AsRef<Path>) -> Result<WordStats> {
    let path = path.as_ref();
    let words = WordList::load(path)?;
    WordStats::compute_from(&words, &format!("'{}'", path.display()))
}

/// Compute statistics for in-memory newline-delimited text.
///
/// ```rust
/// use wordstatlib::analyze_str;
///
/// let stats = analyze_str("cat\ndog\napple\n\n").unwrap();
/// assert_eq!(stats.count, 3);
/// assert_eq!(stats.shortest.word, "cat");
/// ```
pub fn analyze_str(text: &str) -> Result<WordStats> {
    WordStats::compute_from(&WordList::parse(text), "input text")
}
