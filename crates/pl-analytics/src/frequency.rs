//! Per-character frequency histograms.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One histogram entry, serialized as `{"key":"a","value":4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCount {
    pub key: char,
    pub value: usize,
}

/// Occurrence counts per Unicode scalar value, never per byte.
///
/// Invariant: the sum of all counts equals the number of non-ignored
/// characters scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharFrequencies {
    counts: HashMap<char, usize>,
}

impl CharFrequencies {
    /// Count every character of `text`, skipping those in `ignore`.
    /// Empty input yields an empty map.
    pub fn count(text: &str, ignore: Option<&HashSet<char>>) -> Self {
        let mut counts = HashMap::new();
        for c in text.chars() {
            if ignore.is_some_and(|set| set.contains(&c)) {
                continue;
            }
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Elementwise sum of the per-string histograms. Exactly additive:
    /// equivalent to summing `count` over each element, not a re-scan of
    /// a concatenation.
    pub fn count_all<S: AsRef<str>>(texts: &[S], ignore: Option<&HashSet<char>>) -> Self {
        let mut total = HashMap::new();
        for text in texts {
            for (c, n) in Self::count(text.as_ref(), ignore).counts {
                *total.entry(c).or_insert(0) += n;
            }
        }
        Self { counts: total }
    }

    pub fn get(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The distinct characters present, in no particular order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    /// Histogram entries ordered by descending count. Equal counts are
    /// ordered by ascending code point so output is reproducible.
    pub fn sorted(&self) -> Vec<CharCount> {
        let mut entries: Vec<CharCount> = self
            .counts
            .iter()
            .map(|(&key, &value)| CharCount { key, value })
            .collect();
        entries.sort_by(|a, b| b.value.cmp(&a.value).then(a.key.cmp(&b.key)));
        entries
    }
}

/// Characters present in every email address; they carry no
/// discriminating signal for the histogram endpoints.
pub fn default_ignore_set() -> HashSet<char> {
    HashSet::from(['.', '@'])
}
