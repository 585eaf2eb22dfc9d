//! Notegraph Core
//!
//! The note relationship engine. Every operation here is a pure function over
//! an in-memory note collection: no I/O, no global state, inputs are borrowed
//! and never mutated.
//!
//! - [`note`] - the [`Note`] entity, whose links and tags always mirror its content
//! - [`search`] - substring search combined with structured [`SearchFilters`]
//! - [`backlinks`] - direct links, prose mentions and shared tags pointing at a note
//! - [`taxonomy`] - every tag and folder present in a collection
//! - [`graph`] / [`layout`] - node/edge projection and a circular layout

pub mod backlinks;
pub mod graph;
pub mod layout;
pub mod note;
pub mod search;
pub mod taxonomy;

pub use backlinks::{find_backlinks, Backlinks};
pub use graph::{project, project_with, GraphLink, GraphNode, GraphOptions, LinkType, NoteGraph};
pub use layout::{CircularLayout, NodePosition};
pub use note::{Note, NoteVersion};
pub use search::{search_notes, search_notes_at, SearchFilters};
pub use taxonomy::{all_folders, all_tags, tag_counts};

// Search enums live in the config crate so defaults can be configured
pub use notegraph_config::{ContentType, DateRange};
