//! Notegraph Annotation Parser
//!
//! Extracts the two inline micro-syntaxes that connect notes to each other:
//! - Wikilinks: `[[Target Title]]`
//! - Hash tags: `#token`
//!
//! Every function here is pure and total. Text without any annotations yields
//! empty collections, never an error.

pub mod annotations;
pub mod tags;
pub mod wikilinks;

pub use annotations::Annotations;
pub use tags::extract_tags;
pub use wikilinks::{extract_links, strip_wikilinks};

/// Collapse duplicates while keeping the first occurrence of each entry.
pub(crate) fn dedup_first_seen<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}
