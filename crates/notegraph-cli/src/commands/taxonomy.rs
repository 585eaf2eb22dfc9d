use anyhow::Result;
use notegraph_core::{all_folders, all_tags, tag_counts};
use serde::Serialize;

use crate::commands::CommandContext;
use crate::formatting::{self, OutputFormat};

#[derive(Serialize)]
struct TagCount {
    tag: String,
    notes: usize,
}

pub fn tags(ctx: &CommandContext, with_counts: bool) -> Result<String> {
    let notes = ctx.load_notes()?;

    if with_counts {
        let counts: Vec<TagCount> = tag_counts(&notes)
            .into_iter()
            .map(|(tag, notes)| TagCount { tag, notes })
            .collect();
        return match ctx.format {
            OutputFormat::Json => formatting::to_json(&counts),
            OutputFormat::Table if counts.is_empty() => Ok(formatting::no_results("tags")),
            OutputFormat::Table => Ok(formatting::table(
                &["Tag", "Notes"],
                counts
                    .iter()
                    .map(|c| vec![format!("#{}", c.tag), c.notes.to_string()]),
            )
            .to_string()),
        };
    }

    list(ctx.format, "Tag", "tags", all_tags(&notes))
}

pub fn folders(ctx: &CommandContext) -> Result<String> {
    let notes = ctx.load_notes()?;
    list(ctx.format, "Folder", "folders", all_folders(&notes))
}

fn list(format: OutputFormat, header: &str, plural: &str, items: Vec<String>) -> Result<String> {
    match format {
        OutputFormat::Json => formatting::to_json(&items),
        OutputFormat::Table if items.is_empty() => Ok(formatting::no_results(plural)),
        OutputFormat::Table => {
            Ok(formatting::table(&[header], items.into_iter().map(|item| vec![item])).to_string())
        }
    }
}
