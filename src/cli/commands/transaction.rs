use tracker_domain::TransactionKind;

use crate::cli::commands::join_args;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const ADD_NEW_CATEGORY: &str = "Add New Category";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Record money received",
            "income <amount> <category>",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Record money spent",
            "expense <amount> <category>",
            cmd_expense,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_entry(context, TransactionKind::Income, args)
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_entry(context, TransactionKind::Expense, args)
}

fn record_entry(context: &mut ShellContext, kind: TransactionKind, args: &[&str]) -> CommandResult {
    let (amount, category) = match args {
        [amount, rest @ ..] if !rest.is_empty() => (amount.to_string(), join_args(rest)),
        _ if context.mode() == CliMode::Interactive => match prompt_entry(context, kind)? {
            Some(fields) => fields,
            None => {
                io::print_info("Entry cancelled.");
                return Ok(());
            }
        },
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {} <amount> <category>",
                kind.to_string().to_lowercase()
            )))
        }
    };

    let index = context.session.submit_entry(kind, &amount, &category)?;
    let snapshot = context.session.snapshot();
    if let Some(txn) = snapshot.get(index) {
        io::print_success(format!(
            "{} of {} recorded under `{}` (entry #{}).",
            txn.kind(),
            context.format_amount(txn.amount()),
            txn.category(),
            index + 1
        ));
    }
    output::headline(format!(
        "Current Balance: {}",
        context.format_amount(context.session.balance())
    ));
    Ok(())
}

/// Collects amount and category the way the entry dialog does: amount first,
/// then a category picker whose last item registers a new category.
fn prompt_entry(
    context: &mut ShellContext,
    kind: TransactionKind,
) -> Result<Option<(String, String)>, CommandError> {
    let amount = io::prompt_text(&context.theme, &format!("Enter {kind} Amount"))?;

    loop {
        let mut items: Vec<String> = context.session.categories().to_vec();
        items.push(ADD_NEW_CATEGORY.to_string());

        let Some(choice) = io::select_item(&context.theme, "Category", &items)? else {
            return Ok(None);
        };
        if choice + 1 < items.len() {
            return Ok(Some((amount, items[choice].clone())));
        }

        let name = io::prompt_text(&context.theme, "Category Name")?;
        match context.session.add_category(&name) {
            Ok(name) => return Ok(Some((amount, name))),
            Err(err) => io::print_warning(err),
        }
    }
}
