//! Tag and folder taxonomy
//!
//! Sorting is ordinal (byte order of UTF-8, which matches code point order),
//! never locale-aware.

use std::collections::{BTreeMap, BTreeSet};

use crate::note::Note;

/// Every tag used in `notes`, deduplicated and sorted
pub fn all_tags(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .flat_map(|note| note.tags())
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Every folder containing at least one note, deduplicated and sorted
///
/// A note's folder is its path without the final `/` segment. Notes at the
/// root contribute nothing. Only direct parents are listed: `A/B/note` yields
/// `A/B`, not `A`.
pub fn all_folders(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .filter_map(Note::folder)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Number of notes carrying each tag, sorted by tag
pub fn tag_counts(notes: &[Note]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in notes.iter().flat_map(|note| note.tags()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}
