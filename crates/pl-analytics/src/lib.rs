//! Peoplelens analytics core — email character histograms and
//! typo-duplicate detection.
//!
//! Both components are pure computation over in-memory strings: no I/O,
//! no shared state, no error paths. Degenerate inputs yield empty results.

pub mod duplicates;
pub mod frequency;

pub use duplicates::{anagram_signature, find_possible_duplicates, levenshtein, ThresholdSettings};
pub use frequency::{default_ignore_set, CharCount, CharFrequencies};
