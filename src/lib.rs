#![doc(test(attr(deny(warnings))))]

//! Spending Core synthesizes a plausible week of personal-spending
//! transactions from a declarative profile and aggregates them into a
//! day-of-week by hour-of-day heatmap.

pub mod errors;
pub mod generator;
pub mod heatmap;
pub mod profile;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spending Core tracing initialized.");
    });
}
