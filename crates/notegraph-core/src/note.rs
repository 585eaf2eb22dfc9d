//! Note entity
//!
//! A [`Note`] owns its text and the annotations derived from it. The `links`
//! and `tags` fields are private and only ever written by re-running the
//! extractors over `content`, so they can never drift. Deserialization goes
//! through [`NoteDocument`], which has no `links`/`tags` fields at all: any
//! such keys in the input are ignored and recomputed.

use chrono::{DateTime, Utc};
use notegraph_parser::Annotations;
use serde::{Deserialize, Serialize};

/// A prior `(title, content)` snapshot of a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteVersion {
    pub title: String,
    pub content: String,
    /// When this snapshot was replaced
    pub saved_at: DateTime<Utc>,
}

/// A single note with derived links and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "NoteDocument")]
pub struct Note {
    id: String,
    title: String,
    content: String,
    path: String,
    links: Vec<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    versions: Vec<NoteVersion>,
}

/// Serialized form of a note as supplied by a persistence layer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteDocument {
    id: String,
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    path: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    versions: Vec<NoteVersion>,
}

impl From<NoteDocument> for Note {
    fn from(doc: NoteDocument) -> Self {
        let Annotations { links, tags } = Annotations::extract(&doc.content);
        Self {
            id: doc.id,
            title: doc.title,
            content: doc.content,
            path: doc.path,
            links,
            tags,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            versions: doc.versions,
        }
    }
}

impl Note {
    /// Create a note at the root with both timestamps set to now
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        NoteDocument {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            path: String::new(),
            created_at: now,
            updated_at: now,
            versions: Vec::new(),
        }
        .into()
    }

    /// Builder-style: set the virtual folder path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Builder-style: set creation and update timestamps
    #[must_use]
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Replace title and content, keeping the previous pair in `versions`
    ///
    /// Links and tags are re-extracted from the new content. Editing to an
    /// identical title and content is a no-op and records no version.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let title = title.into();
        let content = content.into();
        if title == self.title && content == self.content {
            return;
        }

        let previous_title = std::mem::replace(&mut self.title, title);
        let previous_content = std::mem::replace(&mut self.content, content);
        self.versions.push(NoteVersion {
            title: previous_title,
            content: previous_content,
            saved_at: now,
        });

        let Annotations { links, tags } = Annotations::extract(&self.content);
        self.links = links;
        self.tags = tags;
        self.updated_at = now;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unique `[[...]]` targets in `content`
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Unique `#tags` in `content`
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Prior snapshots, oldest first
    pub fn versions(&self) -> &[NoteVersion] {
        &self.versions
    }

    /// True if this note wiki-links to `title` (exact, case-sensitive)
    pub fn links_to(&self, title: &str) -> bool {
        self.links.iter().any(|link| link == title)
    }

    /// True if this note carries `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of tags this note shares with `other`
    pub fn shared_tag_count(&self, other: &Note) -> usize {
        self.tags.iter().filter(|tag| other.has_tag(tag)).count()
    }

    /// Folder part of `path`: everything before the last `/`
    ///
    /// `None` for notes at the root (no `/`, or an empty prefix).
    pub fn folder(&self) -> Option<&str> {
        self.path
            .rsplit_once('/')
            .map(|(folder, _)| folder)
            .filter(|folder| !folder.is_empty())
    }
}
