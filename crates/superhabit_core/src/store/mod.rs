//! State store owning the current snapshot.
//!
//! # Responsibility
//! - Apply user-driven mutations as "new snapshot from old snapshot".
//! - Keep date lookups behind a swappable clock.
//!
//! # Invariants
//! - Exactly one writer owns a store; handed-out snapshots never change.
//! - Rejected input and unknown ids return the current snapshot unchanged.

pub mod clock;
pub mod state_store;
