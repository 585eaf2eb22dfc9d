//! Backlink resolution
//!
//! Three independent classifications of the notes that point at a target:
//! explicit wikilinks, plain-prose title mentions, and shared tags. A note may
//! appear in more than one list. The target itself never appears.

use serde::Serialize;
use tracing::debug;

use notegraph_parser::strip_wikilinks;

use crate::note::Note;

/// Notes referring to a target note, by kind of reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Backlinks<'a> {
    /// Notes whose links contain the target title exactly
    pub direct: Vec<&'a Note>,
    /// Notes mentioning the title in prose outside of `[[...]]`
    pub mentions: Vec<&'a Note>,
    /// Notes sharing at least one tag with the target
    pub tags: Vec<&'a Note>,
}

impl<'a> Backlinks<'a> {
    /// True when no note refers to the target in any way
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.mentions.is_empty() && self.tags.is_empty()
    }

    /// Sum of the three list lengths (a note may be counted more than once)
    pub fn total(&self) -> usize {
        self.direct.len() + self.mentions.len() + self.tags.len()
    }

    /// Distinct notes across all three lists, in first-appearance order
    pub fn unique_sources(&self) -> Vec<&'a Note> {
        let mut seen = std::collections::HashSet::new();
        let mut sources = Vec::new();
        for &note in self.direct.iter().chain(&self.mentions).chain(&self.tags) {
            if seen.insert(note.id()) {
                sources.push(note);
            }
        }
        sources
    }
}

/// Find every note in `all_notes` that refers to `target`
///
/// Self-references are excluded by id. A target with an empty title has no
/// direct or mention backlinks.
pub fn find_backlinks<'a>(target: &Note, all_notes: &'a [Note]) -> Backlinks<'a> {
    let title = target.title();
    let needle = title.to_lowercase();
    let mut backlinks = Backlinks::default();

    for note in all_notes.iter().filter(|note| note.id() != target.id()) {
        if !title.is_empty() {
            if note.links_to(title) {
                backlinks.direct.push(note);
            }
            if strip_wikilinks(note.content()).to_lowercase().contains(&needle) {
                backlinks.mentions.push(note);
            }
        }

        if note.shared_tag_count(target) > 0 {
            backlinks.tags.push(note);
        }
    }

    debug!(
        target = target.id(),
        direct = backlinks.direct.len(),
        mentions = backlinks.mentions.len(),
        tags = backlinks.tags.len(),
        "Resolved backlinks"
    );
    backlinks
}
