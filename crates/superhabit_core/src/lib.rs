//! Core domain logic for SuperHabit.
//! This crate is the single source of truth for habit state invariants.

pub mod logging;
pub mod model;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{Activity, ActivityId, DEFAULT_GROUP, DEFAULT_QUICK_ACTIVITY_TITLE};
pub use model::milestone::Milestone;
pub use model::snapshot::{Snapshot, SnapshotError, SEED_ACTIVITIES, SEED_GROUPS};
pub use stats::summary::{GroupCount, StatsSummary};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::state_store::StateStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
