//! Graph component configuration
//!
//! Viewport and sizing parameters for the circular graph layout.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Graph projection and layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Ring radius as a fraction of the smaller viewport dimension
    pub radius_ratio: f64,
    /// Radius of a node with no outgoing links
    pub base_node_radius: f64,
    /// Extra radius per outgoing link
    pub node_radius_per_link: f64,
    /// Emit `tag` edges between notes that share tags
    pub tag_edges: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            radius_ratio: 0.4,
            base_node_radius: 8.0,
            node_radius_per_link: 2.0,
            tag_edges: false,
        }
    }
}

impl GraphConfig {
    /// Reject viewports and radii that cannot produce a visible layout
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [("graph.width", self.width), ("graph.height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{} (must be a positive number)", value),
                });
            }
        }

        if !(self.radius_ratio > 0.0 && self.radius_ratio <= 0.5) {
            return Err(ConfigError::InvalidValue {
                field: "graph.radius_ratio".to_string(),
                value: format!("{} (must be in (0, 0.5])", self.radius_ratio),
            });
        }

        for (field, value) in [
            ("graph.base_node_radius", self.base_node_radius),
            ("graph.node_radius_per_link", self.node_radius_per_link),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: format!("{} (must be a non-negative number)", value),
                });
            }
        }

        Ok(())
    }
}
