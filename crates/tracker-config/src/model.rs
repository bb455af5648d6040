use serde::{Deserialize, Serialize};
use tracker_domain::{is_blank, DEFAULT_CATEGORIES};

use crate::ConfigError;

/// Stores user-configurable preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Categories a new session starts with, in listing order.
    #[serde(default = "Config::default_seed_categories")]
    pub seed_categories: Vec<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            seed_categories: Self::default_seed_categories(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 3] = ["currency_symbol", "seed_categories", "ui_color_enabled"];

    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_seed_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Current value of `key` rendered as text.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "currency_symbol" => Ok(self.currency_symbol.clone()),
            "seed_categories" => Ok(self.seed_categories.join(", ")),
            "ui_color_enabled" => Ok(self.ui_color_enabled.to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Updates `key` from its textual form.
    ///
    /// `seed_categories` takes a comma separated list; blank items are dropped.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "currency_symbol" => {
                self.currency_symbol = value.trim().to_string();
            }
            "seed_categories" => {
                let seeds: Vec<String> = value
                    .split(',')
                    .filter(|item| !is_blank(item))
                    .map(|item| item.trim().to_string())
                    .collect();
                if seeds.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.into(),
                        message: "at least one category is required".into(),
                    });
                }
                self.seed_categories = seeds;
            }
            "ui_color_enabled" => {
                self.ui_color_enabled =
                    parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                        key: key.into(),
                        message: format!("expected true/false, got `{}`", value.trim()),
                    })?;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
