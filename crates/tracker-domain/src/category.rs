//! Category naming shared by the registry and the presentation layer.

/// Names every new session starts with, in listing order.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Salary", "Shopping", "Utilities", "Groceries"];

/// Returns `true` when `name` has no visible characters.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
