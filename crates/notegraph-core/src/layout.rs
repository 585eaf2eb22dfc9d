//! Circular graph layout
//!
//! Pure coordinate computation, kept apart from any drawing surface so it can
//! be tested on its own. Nodes are evenly spaced on a ring centered in the
//! viewport, in node order, starting at angle 0 (the 3 o'clock position).

use std::f64::consts::TAU;

use notegraph_config::GraphConfig;
use serde::{Deserialize, Serialize};

use crate::graph::GraphNode;

/// Where to draw one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Visual radius of the node
    pub radius: f64,
}

/// Ring layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    pub width: f64,
    pub height: f64,
    /// Ring radius as a fraction of `min(width, height)`
    pub radius_ratio: f64,
    pub base_node_radius: f64,
    pub node_radius_per_link: f64,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

impl CircularLayout {
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            radius_ratio: config.radius_ratio,
            base_node_radius: config.base_node_radius,
            node_radius_per_link: config.node_radius_per_link,
        }
    }

    /// Builder-style: set the viewport size
    #[must_use]
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn ring_radius(&self) -> f64 {
        self.width.min(self.height) * self.radius_ratio
    }

    /// `base + per_link × link_count`, `8 + 2 × link_count` by default
    pub fn node_radius(&self, link_count: usize) -> f64 {
        self.base_node_radius + self.node_radius_per_link * link_count as f64
    }

    /// Position every node; node `i` of `n` sits at angle `2π·i/n`
    pub fn arrange(&self, nodes: &[GraphNode]) -> Vec<NodePosition> {
        let (cx, cy) = self.center();
        let ring = self.ring_radius();
        let count = nodes.len() as f64;

        nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let angle = TAU * index as f64 / count;
                NodePosition {
                    id: node.id.clone(),
                    x: cx + ring * angle.cos(),
                    y: cy + ring * angle.sin(),
                    radius: self.node_radius(node.link_count),
                }
            })
            .collect()
    }
}
