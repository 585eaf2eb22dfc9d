//! Combined extraction result

use serde::{Deserialize, Serialize};

use crate::{extract_links, extract_tags};

/// Links and tags extracted from a single piece of note content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    /// Unique `[[...]]` targets, first-seen order
    pub links: Vec<String>,
    /// Unique `#tag` names without the `#`, first-seen order
    pub tags: Vec<String>,
}

impl Annotations {
    /// Run both extractors over `content`.
    pub fn extract(content: &str) -> Self {
        Self {
            links: extract_links(content),
            tags: extract_tags(content),
        }
    }

    /// True when the content carried no links and no tags.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.tags.is_empty()
    }
}
