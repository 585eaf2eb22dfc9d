use anyhow::{bail, Result};
use notegraph_core::{find_backlinks, Note};
use serde::Serialize;

use crate::commands::CommandContext;
use crate::formatting::{self, OutputFormat};

#[derive(Serialize)]
struct BacklinkSummary<'a> {
    target: &'a str,
    direct: Vec<&'a str>,
    mentions: Vec<&'a str>,
    tags: Vec<&'a str>,
}

/// Resolve the target by exact title, then case-insensitive title, then id
pub fn resolve_target<'a>(notes: &'a [Note], name: &str) -> Option<&'a Note> {
    notes
        .iter()
        .find(|note| note.title() == name)
        .or_else(|| notes.iter().find(|note| note.title().eq_ignore_ascii_case(name)))
        .or_else(|| notes.iter().find(|note| note.id() == name))
}

pub fn execute(ctx: &CommandContext, name: &str) -> Result<String> {
    let notes = ctx.load_notes()?;
    let Some(target) = resolve_target(&notes, name) else {
        bail!("No note titled '{}'", name);
    };

    let backlinks = find_backlinks(target, &notes);
    let titles = |list: &Vec<&Note>| -> Vec<String> {
        list.iter().map(|note| note.title().to_string()).collect()
    };

    match ctx.format {
        OutputFormat::Json => formatting::to_json(&BacklinkSummary {
            target: target.id(),
            direct: backlinks.direct.iter().map(|note| note.id()).collect(),
            mentions: backlinks.mentions.iter().map(|note| note.id()).collect(),
            tags: backlinks.tags.iter().map(|note| note.id()).collect(),
        }),
        OutputFormat::Table if backlinks.is_empty() => {
            Ok(formatting::no_results(&format!("backlinks to '{}'", target.title())))
        }
        OutputFormat::Table => {
            let rows = [
                ("Linked", titles(&backlinks.direct)),
                ("Mentioned", titles(&backlinks.mentions)),
                ("Shared tags", titles(&backlinks.tags)),
            ]
            .into_iter()
            .map(|(kind, names)| vec![kind.to_string(), names.len().to_string(), names.join(", ")]);

            let table = formatting::table(&["Kind", "Count", "Notes"], rows);
            Ok(format!(
                "Backlinks to '{}'\n{}\n{} distinct notes",
                target.title(),
                table,
                backlinks.unique_sources().len()
            ))
        }
    }
}
