use crate::cli::commands::join_args;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "categories",
            "List known categories",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "add-category",
            "Register a new category",
            "add-category <name>",
            cmd_add_category,
        ),
    ]
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    crate::cli::output::section("Categories");
    for (idx, name) in context.session.categories().iter().enumerate() {
        println!("{:>3}. {}", idx + 1, name);
    }
    Ok(())
}

fn cmd_add_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if !args.is_empty() {
        join_args(args)
    } else if context.mode() == CliMode::Interactive {
        io::prompt_text(&context.theme, "Enter New Category")?
    } else {
        return Err(CommandError::InvalidArguments(
            "usage: add-category <name>".into(),
        ));
    };

    let existed = context.session.registry().contains(&name);
    let name = context.session.add_category(&name)?;
    if existed {
        io::print_info(format!("Category `{}` already exists.", name));
    } else {
        io::print_success(format!("Category `{}` added.", name));
    }
    Ok(())
}
