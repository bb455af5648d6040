//! Ordered, append-only set of category names.

use tracing::debug;
use tracker_domain::{is_blank, DEFAULT_CATEGORIES};

use crate::error::{ValidationError, ValidationResult};

/// Known category names in insertion order.
///
/// Duplicate detection is an exact, case-sensitive string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::seeded(DEFAULT_CATEGORIES)
    }
}

impl CategoryRegistry {
    /// Registry holding the four default categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from arbitrary seeds, skipping blank and repeated names.
    pub fn seeded<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self { names: Vec::new() };
        for seed in seeds {
            let name = seed.into();
            if is_blank(&name) {
                debug!("skipping blank seed category");
                continue;
            }
            registry.insert(name);
        }
        registry
    }

    pub fn list_categories(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Appends `name` unless it is already known, returning the name either way.
    pub fn add_category(&mut self, name: &str) -> ValidationResult<String> {
        if is_blank(name) {
            debug!("rejected blank category name");
            return Err(ValidationError::Blank);
        }
        self.insert(name.to_string());
        Ok(name.to_string())
    }

    fn insert(&mut self, name: String) {
        if self.contains(&name) {
            return;
        }
        debug!(category = %name, "category registered");
        self.names.push(name);
    }
}
