//! Activity domain model.
//!
//! # Responsibility
//! - Define the daily activity record rendered by home and activities screens.
//! - Provide lifecycle helpers for completion and soft-delete (archive).
//!
//! # Invariants
//! - `id` is assigned by the store and never reused within a session.
//! - `is_archived` only ever moves from `false` to `true`.
//! - `group` is a display label, not a reference into the group list.

use serde::{Deserialize, Serialize};

/// Store-assigned activity identifier.
///
/// Kept as a type alias so signatures read as ids rather than counters.
pub type ActivityId = i64;

/// Group label used for quick-added activities.
pub const DEFAULT_GROUP: &str = "Other";

/// Title the home screen passes for its one-tap quick add button.
pub const DEFAULT_QUICK_ACTIVITY_TITLE: &str = "New activity";

/// One tracked activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    /// Checkbox state on the home screen.
    pub is_done: bool,
    /// Free-text group name; may name a group that was never created.
    pub group: String,
    /// Soft delete flag. Archived activities stay in the collection.
    #[serde(default)]
    pub is_archived: bool,
}

impl Activity {
    /// Creates an open, unarchived activity.
    pub fn new(id: ActivityId, title: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_done: false,
            group: group.into(),
            is_archived: false,
        }
    }

    /// Hides this activity from every list view.
    pub fn archive(&mut self) {
        self.is_archived = true;
    }

    /// Returns whether this activity should be listed.
    pub fn is_active(&self) -> bool {
        !self.is_archived
    }
}
