//! Core data structures for word list statistics.
//!
//! A [`WordStats`] holds everything a report prints:
//!
//! - **count**: number of words
//! - **longest** / **shortest**: the extreme words with their lengths
//! - **histogram**: words per length, from the longest length down to 1
//!
//! Length is measured in Unicode scalar values (`chars`), not bytes.
//!
//! On ties the first word in list order wins, for both longest and shortest.
//! The list is scanned once per statistic and never reordered.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::WordstatError;
use crate::wordlist::WordList;
use crate::Result;

/// Length of a word in characters.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// A word together with its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub length: usize,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let length = word_length(&word);
        Self { word, length }
    }
}

/// Number of words with one exact length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub length: usize,
    pub count: usize,
}

/// Words per length, one bucket for every length from the maximum down to 1.
///
/// Lengths with no words still get a bucket with a count of 0. Deserializing
/// rejects bucket lists that break this layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistogram")]
pub struct LengthHistogram {
    buckets: Vec<LengthBucket>,
}

/// Unchecked wire form of [`LengthHistogram`].
#[derive(Deserialize)]
struct RawHistogram {
    buckets: Vec<LengthBucket>,
}

impl TryFrom<RawHistogram> for LengthHistogram {
    type Error = String;

    fn try_from(raw: RawHistogram) -> std::result::Result<Self, Self::Error> {
        let max = raw.buckets.len();
        for (i, bucket) in raw.buckets.iter().enumerate() {
            if bucket.length != max - i {
                return Err(format!(
                    "histogram bucket {i} has length {}, expected {}",
                    bucket.length,
                    max - i
                ));
            }
        }
        Ok(Self {
            buckets: raw.buckets,
        })
    }
}

impl LengthHistogram {
    /// Build the histogram in a single pass over the words.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        // counts[len] for len in 0..=max
        let mut counts: Vec<usize> = Vec::new();
        for word in words {
            let len = word_length(word);
            if len >= counts.len() {
                counts.resize(len + 1, 0);
            }
            counts[len] += 1;
        }

        let buckets = (1..counts.len())
            .rev()
            .map(|length| LengthBucket {
                length,
                count: counts[length],
            })
            .collect();
        Self { buckets }
    }

    /// Buckets in descending length order.
    pub fn iter(&self) -> impl Iterator<Item = &LengthBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Largest length covered (0 for an empty histogram).
    pub fn max_length(&self) -> usize {
        self.buckets.first().map_or(0, |b| b.length)
    }

    /// Words of exactly `length` characters.
    pub fn count_at(&self, length: usize) -> usize {
        let max = self.max_length();
        if length == 0 || length > max {
            return 0;
        }
        self.buckets.get(max - length).map_or(0, |b| b.count)
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Statistics for one word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    /// Number of words.
    pub count: usize,
    /// First word with the maximum length.
    pub longest: WordEntry,
    /// First word with the minimum length.
    pub shortest: WordEntry,
    /// Words per length, longest first.
    pub histogram: LengthHistogram,
}

impl WordStats {
    /// Compute statistics for `words`.
    ///
    /// Fails with [`WordstatError::EmptyInput`] when there is nothing to
    /// measure.
    pub fn compute(words: &WordList) -> Result<Self> {
        Self::compute_from(words, "word list")
    }

    pub(crate) fn compute_from(words: &WordList, origin: &str) -> Result<Self> {
        let (longest, shortest) = match (longest_word(words), shortest_word(words)) {
            (Some(longest), Some(shortest)) => (longest, shortest),
            _ => {
                return Err(WordstatError::EmptyInput {
                    origin: origin.to_string(),
                })
            }
        };

        let histogram = LengthHistogram::from_words(words.iter());
        debug!(
            "computed stats for {} words (lengths {}..={})",
            words.len(),
            shortest.length,
            longest.length
        );

        Ok(Self {
            count: words.len(),
            longest,
            shortest,
            histogram,
        })
    }
}

/// First word of maximum length.
pub fn longest_word(words: &WordList) -> Option<WordEntry> {
    first_by(words, |candidate, best| candidate > best)
}

/// First word of minimum length.
pub fn shortest_word(words: &WordList) -> Option<WordEntry> {
    first_by(words, |candidate, best| candidate < best)
}

/// Keep the first word whose length beats every earlier one under `better`.
///
/// `better` must be strict so later words of equal length never replace an
/// earlier one.
fn first_by(words: &WordList, better: impl Fn(usize, usize) -> bool) -> Option<WordEntry> {
    let mut best: Option<(&str, usize)> = None;
    for word in words.iter() {
        let len = word_length(word);
        match best {
            Some((_, best_len)) if !better(len, best_len) => {}
            _ => best = Some((word, len)),
        }
    }
    best.map(|(word, length)| WordEntry {
        word: word.to_string(),
        length,
    })
}
