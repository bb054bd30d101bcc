//! Typo-duplicate detection: anagram bucketing + Levenshtein distance.

use crate::frequency::CharFrequencies;
use std::collections::HashMap;

/// Tunable filters for what counts as "similar enough". No upper bound is
/// enforced on either value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSettings {
    /// Maximum Levenshtein distance for two strings to be considered
    /// duplicates.
    pub distance_threshold: usize,
    /// Exact code-point length difference still considered comparable.
    /// Equal lengths always pass.
    pub length_threshold: usize,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            distance_threshold: 1,
            length_threshold: 1,
        }
    }
}

/// The sorted, deduplicated characters of `s`, joined into one bucket key.
/// Any permutation of `s` maps to the same signature. No ignore set is
/// applied here: every distinct character counts toward the bucket key.
pub fn anagram_signature(s: &str) -> String {
    let mut chars: Vec<char> = CharFrequencies::count(s, None).chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Group strings that plausibly represent the same value typed slightly
/// differently.
///
/// Strings are first bucketed by [`anagram_signature`]. A typo that
/// transposes or repeats existing characters preserves the set of distinct
/// characters, so true typo-pairs land in the same bucket; a substitution
/// that introduces a brand-new character breaks the signature and that pair
/// is never compared. That recall trade-off is what keeps the otherwise
/// quadratic comparison tractable.
///
/// Within each bucket of two or more, every pair is checked with the
/// length filter and then the distance filter. Each emitted group is
/// anchored on the earlier string and lists every later bucket member that
/// passed both filters. Groups may overlap; the result is not a partition
/// of the input.
///
/// Empty lists, single-element lists, and all-empty strings yield an empty
/// result.
pub fn find_possible_duplicates(
    strings: &[String],
    settings: &ThresholdSettings,
) -> Vec<Vec<String>> {
    // Buckets keep first-occurrence order so output is deterministic.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<Vec<&String>> = Vec::new();
    for s in strings {
        if s.is_empty() {
            continue;
        }
        let slot = *slots.entry(anagram_signature(s)).or_insert_with(|| {
            buckets.push(Vec::new());
            buckets.len() - 1
        });
        buckets[slot].push(s);
    }

    let mut duplicates = Vec::new();
    for bucket in buckets.iter().filter(|b| b.len() >= 2) {
        for i in 0..bucket.len() {
            let mut group = vec![bucket[i].clone()];
            for j in (i + 1)..bucket.len() {
                if !lengths_comparable(bucket[i], bucket[j], settings.length_threshold) {
                    continue;
                }
                if levenshtein(bucket[i], bucket[j]) > settings.distance_threshold {
                    continue;
                }
                group.push(bucket[j].clone());
            }
            if group.len() > 1 {
                duplicates.push(group);
            }
        }
    }
    duplicates
}

/// Equal lengths always pass; otherwise the absolute difference must equal
/// the threshold exactly. Lengths are counted in code points to line up
/// with the distance computation.
fn lengths_comparable(a: &str, b: &str, threshold: usize) -> bool {
    let (la, lb) = (a.chars().count(), b.chars().count());
    la == lb || la.abs_diff(lb) == threshold
}

/// Levenshtein edit distance over Unicode code points. Insertions,
/// deletions, and substitutions each cost 1.
///
/// Single rolling row, so space is O(min(|a|,|b|)) and time O(|a|·|b|).
/// Identical inputs short-circuit without running the table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let mut s1: Vec<char> = a.chars().collect();
    let mut s2: Vec<char> = b.chars().collect();
    // Keep the row sized to the shorter string.
    if s1.len() > s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }

    let mut row: Vec<usize> = (0..=s1.len()).collect();
    for (i, &c2) in s2.iter().enumerate() {
        let mut prev = i + 1;
        for (j, &c1) in s1.iter().enumerate() {
            let current = if c2 == c1 {
                row[j] // match
            } else {
                (row[j] + 1).min(prev + 1).min(row[j + 1] + 1)
            };
            row[j] = prev;
            prev = current;
        }
        row[s1.len()] = prev;
    }
    row[s1.len()]
}
