use anyhow::{Context, Result};
use notegraph_core::{
    project_with, CircularLayout, GraphLink, GraphNode, GraphOptions, NodePosition,
};
use serde::Serialize;

use crate::commands::CommandContext;
use crate::formatting::{self, OutputFormat};

#[derive(Serialize)]
struct GraphOutput {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    positions: Vec<NodePosition>,
}

pub fn execute(
    ctx: &CommandContext,
    width: Option<f64>,
    height: Option<f64>,
    tag_edges: bool,
) -> Result<String> {
    let mut graph_config = ctx.config.graph.clone();
    graph_config.width = width.unwrap_or(graph_config.width);
    graph_config.height = height.unwrap_or(graph_config.height);
    graph_config.tag_edges |= tag_edges;
    graph_config
        .validate()
        .context("Invalid graph viewport")?;

    let notes = ctx.load_notes()?;
    let graph = project_with(&notes, &GraphOptions::from_config(&graph_config));
    let positions = CircularLayout::from_config(&graph_config).arrange(&graph.nodes);

    match ctx.format {
        OutputFormat::Json => formatting::to_json(&GraphOutput {
            nodes: graph.nodes,
            links: graph.links,
            positions,
        }),
        OutputFormat::Table => {
            let rows = graph.nodes.iter().zip(&positions).map(|(node, pos)| {
                vec![
                    node.title.clone(),
                    node.group.to_string(),
                    node.link_count.to_string(),
                    node.back_link_count.to_string(),
                    format!("({:.1}, {:.1})", pos.x, pos.y),
                    format!("{:.0}", pos.radius),
                ]
            });
            let table = formatting::table(
                &["Title", "Group", "Links", "Backlinks", "Position", "Radius"],
                rows,
            );
            Ok(format!(
                "{}\n{} nodes, {} edges",
                table,
                graph.nodes.len(),
                graph.links.len()
            ))
        }
    }
}
