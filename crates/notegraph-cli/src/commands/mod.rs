//! Command implementations
//!
//! Every command renders its output to a `String`; `main` prints it. This
//! keeps commands testable without capturing stdout.

pub mod backlinks;
pub mod config;
pub mod graph;
pub mod links;
pub mod search;
pub mod taxonomy;

use std::path::PathBuf;

use anyhow::{Context, Result};
use notegraph_config::NotegraphConfig;
use notegraph_core::Note;

use crate::cli::{Commands, ConfigCommands};
use crate::formatting::OutputFormat;
use crate::loader;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: NotegraphConfig,
    pub format: OutputFormat,
    pub notes_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load the note snapshot named by `--notes`
    pub fn load_notes(&self) -> Result<Vec<Note>> {
        let path = self
            .notes_path
            .as_deref()
            .context("No note snapshot given; pass --notes <PATH> or set NOTEGRAPH_NOTES")?;
        loader::load_notes(path)
    }
}

/// Dispatch a parsed command
pub fn run(ctx: &CommandContext, command: Commands) -> Result<String> {
    match command {
        Commands::Search(args) => search::execute(ctx, &args),
        Commands::Backlinks { note } => backlinks::execute(ctx, &note),
        Commands::Tags { counts } => taxonomy::tags(ctx, counts),
        Commands::Folders => taxonomy::folders(ctx),
        Commands::Graph {
            width,
            height,
            tag_edges,
        } => graph::execute(ctx, width, height, tag_edges),
        Commands::Links { text } => links::execute(ctx, &text),
        Commands::Config(ConfigCommands::Dump) => Ok(config::dump(ctx)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_notes_path_is_reported() {
        let ctx = CommandContext {
            config: NotegraphConfig::default(),
            format: OutputFormat::Table,
            notes_path: None,
        };
        let err = run(&ctx, Commands::Folders).unwrap_err();
        assert!(err.to_string().contains("--notes"));
    }

    #[test]
    fn test_links_needs_no_snapshot() {
        let ctx = CommandContext {
            config: NotegraphConfig::default(),
            format: OutputFormat::Json,
            notes_path: None,
        };
        let out = run(
            &ctx,
            Commands::Links {
                text: "[[A]] #b".to_string(),
            },
        )
        .unwrap();
        assert!(out.contains("\"A\""));
    }
}
