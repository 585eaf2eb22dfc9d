//! Graph projection
//!
//! Turns a note collection into nodes and edges for visualization. The
//! projection is rebuilt from scratch on every call; nothing about it is
//! cached or persisted. Positions are computed separately by
//! [`crate::layout::CircularLayout`].

use std::collections::{BTreeSet, HashMap};

use notegraph_config::GraphConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::note::Note;

/// Kind of relationship an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Wiki,
    Tag,
    Auto,
    Backlink,
}

/// One note in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Note id
    pub id: String,
    pub title: String,
    /// Clustering bucket: 0 for root notes, otherwise 1 + the index of the
    /// note's top-level folder among all top-level folders in sorted order
    pub group: usize,
    pub tags: Vec<String>,
    /// Outgoing links, including dangling ones
    pub link_count: usize,
    /// Other notes whose links contain this note's title
    pub back_link_count: usize,
}

/// A directed edge between two notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub strength: f64,
}

/// Nodes and edges projected from a note collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl NoteGraph {
    /// Edges of a single kind
    pub fn links_of(&self, kind: LinkType) -> impl Iterator<Item = &GraphLink> {
        self.links.iter().filter(move |link| link.kind == kind)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Projection options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Also emit one `tag` edge per pair of notes sharing tags
    pub tag_edges: bool,
}

impl GraphOptions {
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            tag_edges: config.tag_edges,
        }
    }
}

/// Project `notes` with default options (wiki edges only)
pub fn project(notes: &[Note]) -> NoteGraph {
    project_with(notes, &GraphOptions::default())
}

/// Project `notes` into a graph
///
/// Each link entry that names an existing note becomes a `wiki` edge with
/// strength 1 to the first note (in collection order) with that exact title.
/// Dangling links produce no edge but still count toward `link_count`.
pub fn project_with(notes: &[Note], options: &GraphOptions) -> NoteGraph {
    let mut by_title: HashMap<&str, &Note> = HashMap::new();
    let mut inbound: HashMap<&str, usize> = HashMap::new();
    for note in notes {
        by_title.entry(note.title()).or_insert(note);
        for link in note.links() {
            *inbound.entry(link.as_str()).or_default() += 1;
        }
    }

    let top_folders: Vec<&str> = notes
        .iter()
        .filter_map(top_level_folder)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let nodes: Vec<GraphNode> = notes
        .iter()
        .map(|note| {
            let incoming = inbound.get(note.title()).copied().unwrap_or(0);
            // Links are unique per note, so a self-link contributes at most one
            let self_link = usize::from(note.links_to(note.title()));
            let group = top_level_folder(note)
                .and_then(|folder| top_folders.binary_search(&folder).ok())
                .map_or(0, |index| index + 1);

            GraphNode {
                id: note.id().to_string(),
                title: note.title().to_string(),
                group,
                tags: note.tags().to_vec(),
                link_count: note.links().len(),
                back_link_count: incoming - self_link,
            }
        })
        .collect();

    let mut links: Vec<GraphLink> = Vec::new();
    let mut dangling = 0usize;
    for note in notes {
        for link in note.links() {
            match by_title.get(link.as_str()) {
                Some(target) => links.push(GraphLink {
                    source: note.id().to_string(),
                    target: target.id().to_string(),
                    kind: LinkType::Wiki,
                    strength: 1.0,
                }),
                None => dangling += 1,
            }
        }
    }

    if options.tag_edges {
        for (i, a) in notes.iter().enumerate() {
            for b in &notes[i + 1..] {
                let shared = a.shared_tag_count(b);
                if shared > 0 {
                    links.push(GraphLink {
                        source: a.id().to_string(),
                        target: b.id().to_string(),
                        kind: LinkType::Tag,
                        strength: shared as f64,
                    });
                }
            }
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = links.len(),
        dangling,
        "Projected note graph"
    );
    NoteGraph { nodes, links }
}

/// First path segment, for notes that live in a folder
fn top_level_folder(note: &Note) -> Option<&str> {
    note.folder()
        .map(|folder| folder.split('/').next().unwrap_or(folder))
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_and_wiki_edges() {
        let notes = vec![
            Note::new("a", "Alpha", "to [[Beta]] and [[Gamma]]"),
            Note::new("b", "Beta", "back to [[Alpha]]"),
            Note::new("c", "Gamma", ""),
        ];
        let graph = project(&notes);

        assert_eq!(graph.nodes.len(), 3);
        let alpha = graph.node("a").unwrap();
        assert_eq!(alpha.link_count, 2);
        assert_eq!(alpha.back_link_count, 1);
        assert_eq!(graph.node("c").unwrap().back_link_count, 1);

        let edges: Vec<(&str, &str)> = graph
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "a")]);
        assert!(graph.links.iter().all(|l| l.kind == LinkType::Wiki && l.strength == 1.0));
    }

    #[test]
    fn test_dangling_links_are_dropped() {
        let notes = vec![Note::new("a", "Alpha", "[[Nowhere]] [[Elsewhere]]")];
        let graph = project(&notes);
        assert!(graph.links.is_empty());
        assert_eq!(graph.node("a").unwrap().link_count, 2);
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_note() {
        let notes = vec![
            Note::new("a", "Alpha", "[[Twin]]"),
            Note::new("t1", "Twin", ""),
            Note::new("t2", "Twin", ""),
        ];
        let graph = project(&notes);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].target, "t1");
        // Both twins are referenced by title
        assert_eq!(graph.node("t1").unwrap().back_link_count, 1);
        assert_eq!(graph.node("t2").unwrap().back_link_count, 1);
    }

    #[test]
    fn test_self_link_is_an_edge_but_not_a_backlink() {
        let notes = vec![Note::new("a", "Alpha", "[[Alpha]]")];
        let graph = project(&notes);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].source, graph.links[0].target);
        assert_eq!(graph.node("a").unwrap().back_link_count, 0);
    }

    #[test]
    fn test_groups_follow_top_level_folders() {
        let notes = vec![
            Note::new("1", "One", "").with_path("Work/Notes/One"),
            Note::new("2", "Two", "").with_path("Home/Two"),
            Note::new("3", "Three", "").with_path("Work/Three"),
            Note::new("4", "Four", "").with_path("Four"),
        ];
        let graph = project(&notes);
        let groups: Vec<usize> = graph.nodes.iter().map(|n| n.group).collect();
        assert_eq!(groups, vec![2, 1, 2, 0]);
    }

    #[test]
    fn test_tag_edges_are_opt_in() {
        let notes = vec![
            Note::new("a", "A", "#x #y"),
            Note::new("b", "B", "#y #x"),
            Note::new("c", "C", "#z"),
        ];
        assert_eq!(project(&notes).links_of(LinkType::Tag).count(), 0);

        let graph = project_with(&notes, &GraphOptions { tag_edges: true });
        let tag_edges: Vec<&GraphLink> = graph.links_of(LinkType::Tag).collect();
        assert_eq!(tag_edges.len(), 1);
        assert_eq!(tag_edges[0].source, "a");
        assert_eq!(tag_edges[0].target, "b");
        assert_eq!(tag_edges[0].strength, 2.0);
    }

    #[test]
    fn test_link_serializes_kind_as_type() {
        let link = GraphLink {
            source: "a".into(),
            target: "b".into(),
            kind: LinkType::Wiki,
            strength: 1.0,
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["type"], "wiki");
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let graph = project(&[Note::new("a", "Alpha", "")]);
        let value = serde_json::to_value(&graph.nodes[0]).unwrap();
        assert_eq!(value["linkCount"], 0);
        assert_eq!(value["backLinkCount"], 0);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(project(&[]), NoteGraph::default());
    }
}
