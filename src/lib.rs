#![doc(test(attr(deny(warnings))))]

//! Finance Tracker records income and expense entries for a single in-memory
//! session and exposes them through an interactive or scripted shell.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

pub use tracker_config as config;
pub use tracker_core as engine;
pub use tracker_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finance Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
