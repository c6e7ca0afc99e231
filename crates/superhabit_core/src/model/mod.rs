//! Habit tracking domain model.
//!
//! # Responsibility
//! - Define the activity, milestone and snapshot shapes used by the store.
//! - Own the fixed seed values a session starts from.
//!
//! # Invariants
//! - Activity ids are unique within one snapshot.
//! - Archiving is a one-way soft delete; activities are never removed.
//! - Activity groups are free-text names, never checked against the group list.

pub mod activity;
pub mod milestone;
pub mod snapshot;
