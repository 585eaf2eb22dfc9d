use crate::commands::CommandContext;

/// Effective configuration as TOML (the format flag does not apply)
pub fn dump(ctx: &CommandContext) -> String {
    ctx.config.to_toml_string()
}
