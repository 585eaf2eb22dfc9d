//! Note search and filtering
//!
//! A search is a case-insensitive substring query ANDed with up to three
//! structured filters (recency, tags, folder prefix). Both sides are plain
//! predicates, so the result is simply the input notes that pass all of them,
//! in input order.

use chrono::{DateTime, Duration, Utc};
use notegraph_config::{ContentType, DateRange, SearchConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::note::Note;

/// Structured search filters
///
/// Empty `tags` or `folders` disable that filter. Within each list the
/// semantics are OR: a note passes if it matches any entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchFilters {
    pub content_type: ContentType,
    pub date_range: DateRange,
    pub tags: Vec<String>,
    /// Literal path prefixes, not segment-aware: `Foo` also matches `FooBar/x`
    pub folders: Vec<String>,
}

impl SearchFilters {
    /// Filters seeded from configured defaults
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            content_type: config.content_type,
            date_range: config.date_range,
            ..Default::default()
        }
    }

    /// Builder-style: set the queried field
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Builder-style: set the recency window
    #[must_use]
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Builder-style: set the accepted tags
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder-style: set the accepted folder prefixes
    #[must_use]
    pub fn with_folders(mut self, folders: Vec<String>) -> Self {
        self.folders = folders;
        self
    }

    /// True if `note` passes the recency, tag and folder filters
    ///
    /// `content_type` is not consulted here; it only narrows the text query.
    pub fn accepts(&self, note: &Note, now: DateTime<Utc>) -> bool {
        if let Some(days) = self.date_range.days() {
            if note.updated_at() < now - Duration::days(days) {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| note.has_tag(tag)) {
            return false;
        }

        if !self.folders.is_empty()
            && !self
                .folders
                .iter()
                .any(|folder| note.path().starts_with(folder.as_str()))
        {
            return false;
        }

        true
    }
}

/// Search `notes` against the current time
///
/// See [`search_notes_at`].
pub fn search_notes<'a>(
    notes: &'a [Note],
    query: &str,
    filters: Option<&SearchFilters>,
) -> Vec<&'a Note> {
    search_notes_at(notes, query, filters, Utc::now())
}

/// Search `notes` with an explicit clock for the recency filter
///
/// An empty query with no filters returns every note in input order. The
/// result never contains more notes than the input and preserves its order.
pub fn search_notes_at<'a>(
    notes: &'a [Note],
    query: &str,
    filters: Option<&SearchFilters>,
    now: DateTime<Utc>,
) -> Vec<&'a Note> {
    if query.is_empty() && filters.is_none() {
        return notes.iter().collect();
    }

    let content_type = filters.map(|f| f.content_type).unwrap_or_default();
    let needle = query.to_lowercase();

    let results: Vec<&Note> = notes
        .iter()
        .filter(|note| needle.is_empty() || matches_query(note, &needle, content_type))
        .filter(|note| filters.map_or(true, |f| f.accepts(note, now)))
        .collect();

    debug!(
        total = notes.len(),
        matched = results.len(),
        query,
        content_type = %content_type,
        "Searched notes"
    );
    results
}

/// Case-insensitive substring match; `needle` must already be lowercased
fn matches_query(note: &Note, needle: &str, content_type: ContentType) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    match content_type {
        ContentType::Title => contains(note.title()),
        ContentType::Content => contains(note.content()),
        ContentType::Path => contains(note.path()),
        ContentType::All => {
            contains(note.title())
                || contains(note.content())
                || contains(note.path())
                || note.tags().iter().any(|tag| contains(tag))
        }
    }
}
