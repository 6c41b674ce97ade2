//! Synthetic spending-event generation: the entry factory and the weekly
//! plan executor.

pub mod entry;
pub mod plan;

pub use entry::SpendingEntry;
pub use plan::generate;

/// Profile used when the caller does not name one.
pub const DEFAULT_PROFILE: &str = "normal";
