//! tracker-config
//!
//! User preferences for the finance tracker and their on-disk JSON form.
//! Only preferences are stored here; ledger data never touches disk.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
