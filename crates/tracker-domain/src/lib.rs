//! tracker-domain
//!
//! Pure domain models for the finance tracker (transactions and category seeds).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod transaction;

pub use category::*;
pub use transaction::*;
