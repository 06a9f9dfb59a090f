#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers record, ledger, and advisory primitives for tracking
//! daily calorie intake and cash spending against per-day limits.

pub mod advice;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tracker_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
