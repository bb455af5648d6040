use rust_decimal::Decimal;
use serde::Serialize;
use tracker_domain::Transaction;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableRenderer};
use crate::currency::format_date;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show recorded transactions", "list", cmd_list),
        CommandEntry::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandEntry::new(
            "summary",
            "Show totals per category",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "export",
            "Print the session as JSON",
            "export",
            cmd_export,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.session.snapshot();
    if snapshot.is_empty() {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(Some("Transactions"), &["#", "Type", "Amount", "Category", "Date"]);
    for (idx, txn) in snapshot.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            txn.kind().to_string(),
            context.format_amount(txn.amount()),
            txn.category().to_string(),
            format_date(txn.occurred_on()),
        ]);
    }
    TableRenderer::render(&table);
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::headline(format!(
        "Current Balance: {}",
        context.format_amount(context.session.balance())
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    if summary.transaction_count == 0 {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(Some("Summary"), &["Category", "Income", "Expense", "Net"]);
    for total in &summary.per_category {
        table.add_row(vec![
            total.category.clone(),
            context.format_amount(total.income),
            context.format_amount(total.expense),
            context.format_amount(total.net()),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        context.format_amount(summary.total_income),
        context.format_amount(summary.total_expense),
        context.format_amount(summary.net()),
    ]);
    TableRenderer::render(&table);
    Ok(())
}

#[derive(Serialize)]
struct SessionExport<'a> {
    balance: Decimal,
    categories: &'a [String],
    transactions: &'a [Transaction],
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.session.snapshot();
    let export = SessionExport {
        balance: context.session.balance(),
        categories: context.session.categories(),
        transactions: snapshot.as_slice(),
    };
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
