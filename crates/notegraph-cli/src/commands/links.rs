use anyhow::Result;
use notegraph_parser::Annotations;

use crate::commands::CommandContext;
use crate::formatting::{self, OutputFormat};

/// Show the links and tags found in `text`
pub fn execute(ctx: &CommandContext, text: &str) -> Result<String> {
    let annotations = Annotations::extract(text);

    match ctx.format {
        OutputFormat::Json => formatting::to_json(&annotations),
        OutputFormat::Table if annotations.is_empty() => {
            Ok(formatting::no_results("links or tags"))
        }
        OutputFormat::Table => {
            let rows = annotations
                .links
                .iter()
                .map(|link| vec!["link".to_string(), format!("[[{}]]", link)])
                .chain(
                    annotations
                        .tags
                        .iter()
                        .map(|tag| vec!["tag".to_string(), format!("#{}", tag)]),
                );
            Ok(formatting::table(&["Kind", "Value"], rows).to_string())
        }
    }
}
