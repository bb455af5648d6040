use tracker_config::Config;

use crate::cli::commands::join_args;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableRenderer};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value @ ..] if !value.is_empty() => set(context, key, &join_args(value)),
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let mut table = Table::new(Some("Configuration"), &["Key", "Value"]);
    for key in Config::KEYS {
        table.add_row(vec![key.to_string(), context.config.get(key)?]);
    }
    TableRenderer::render(&table);
    io::print_info(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config = updated;
    context.persist_config()?;

    if key == "ui_color_enabled" {
        output::set_color_enabled(
            context.config.ui_color_enabled && context.mode() == CliMode::Interactive,
        );
    }
    io::print_success(format!("`{}` set to `{}`.", key, context.config.get(key)?));
    if key == "seed_categories" {
        io::print_info("New seed categories apply to the next session.");
    }
    Ok(())
}
