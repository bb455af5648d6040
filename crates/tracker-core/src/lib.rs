//! tracker-core
//!
//! In-memory ledger state engine for the finance tracker.
//! Depends on tracker-domain. No CLI, no terminal I/O, no persistence.

pub mod balance;
pub mod category_registry;
pub mod entry_builder;
pub mod error;
pub mod ledger;
pub mod session;
pub mod summary;
pub mod time;

pub use balance::*;
pub use category_registry::*;
pub use entry_builder::*;
pub use error::{ValidationError, ValidationResult};
pub use ledger::*;
pub use session::*;
pub use summary::*;
pub use time::*;
