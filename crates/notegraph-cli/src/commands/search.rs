use anyhow::Result;
use notegraph_core::{search_notes, SearchFilters};
use serde::Serialize;

use crate::cli::SearchArgs;
use crate::commands::CommandContext;
use crate::formatting::{self, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit<'a> {
    id: &'a str,
    title: &'a str,
    path: &'a str,
    tags: &'a [String],
    updated_at: String,
}

/// Build filters from configured defaults overlaid with command-line flags
///
/// Returns `None` when neither the config nor the flags narrow anything, so an
/// empty query lists every note unchanged.
pub fn build_filters(ctx: &CommandContext, args: &SearchArgs) -> Option<SearchFilters> {
    let mut filters = SearchFilters::from_config(&ctx.config.search);
    if let Some(field) = args.field {
        filters.content_type = field.into();
    }
    if let Some(since) = args.since {
        filters.date_range = since.into();
    }
    filters.tags = args.tags.clone();
    filters.folders = args.folders.clone();

    (args.has_filters() || filters != SearchFilters::default()).then_some(filters)
}

pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<String> {
    let notes = ctx.load_notes()?;
    let filters = build_filters(ctx, args);
    let results = search_notes(&notes, &args.query, filters.as_ref());

    let hits: Vec<SearchHit> = results
        .iter()
        .map(|note| SearchHit {
            id: note.id(),
            title: note.title(),
            path: note.path(),
            tags: note.tags(),
            updated_at: note.updated_at().to_rfc3339(),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => formatting::to_json(&hits),
        OutputFormat::Table if hits.is_empty() => Ok(formatting::no_results("matching notes")),
        OutputFormat::Table => {
            let rows = results.iter().map(|note| {
                vec![
                    note.title().to_string(),
                    note.path().to_string(),
                    note.tags().join(", "),
                    formatting::preview(note.content(), 48),
                ]
            });
            let table = formatting::table(&["Title", "Path", "Tags", "Preview"], rows);
            Ok(format!("{}\n{} of {} notes", table, results.len(), notes.len()))
        }
    }
}
