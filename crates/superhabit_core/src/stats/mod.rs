//! Read-only statistics derived from a snapshot.
//!
//! # See also
//! - `crate::model::snapshot::Snapshot::active_activities`

pub mod summary;
