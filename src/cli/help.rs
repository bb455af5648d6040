use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::table::{Table, TableRenderer};

pub fn print_overview(registry: &CommandRegistry) {
    let mut table = Table::new(Some("Available commands"), &["Command", "Description"]);
    for entry in registry.list() {
        table.add_row(vec![entry.name, entry.description]);
    }
    TableRenderer::render(&table);
    output::info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    println!("  description: {}", entry.description);
    println!("  usage:       {}", entry.usage);
}
