//! Immutable state snapshot.
//!
//! # Responsibility
//! - Bundle the daily note, activities, groups and milestones into one value.
//! - Provide the shared read-only views every screen derives from.
//! - Round-trip through JSON for saved-instance state.
//!
//! # Invariants
//! - Activity ids are positive and unique.
//! - `activities` order is insertion order, which is display order.
//! - `active_activities` is the only place the archive filter lives.

use crate::model::activity::{Activity, ActivityId, DEFAULT_GROUP};
use crate::model::milestone::Milestone;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Groups every session starts with.
pub const SEED_GROUPS: &[&str] = &["Goals", DEFAULT_GROUP];

/// Activities every session starts with: `(id, title, group)`.
pub const SEED_ACTIVITIES: &[(ActivityId, &str, &str)] = &[
    (1, "Study for 30 minutes", "Goals"),
    (2, "Light exercise", "Goals"),
    (3, "Follow up on orders", DEFAULT_GROUP),
];

/// Errors raised when an externally supplied snapshot is rejected.
#[derive(Debug)]
pub enum SnapshotError {
    /// Payload is not valid snapshot JSON.
    Json(serde_json::Error),
    /// Two activities share one id.
    DuplicateActivityId(ActivityId),
    /// Activity ids start at 1.
    NonPositiveActivityId(ActivityId),
    /// No id would be left to assign after this one.
    ActivityIdExhausted(ActivityId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
            Self::DuplicateActivityId(id) => write!(f, "duplicate activity id: {id}"),
            Self::NonPositiveActivityId(id) => {
                write!(f, "activity id must be positive, got {id}")
            }
            Self::ActivityIdExhausted(id) => {
                write!(f, "activity id {id} leaves no id to assign next")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::DuplicateActivityId(_)
            | Self::NonPositiveActivityId(_)
            | Self::ActivityIdExhausted(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Full app state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub daily_note: String,
    pub activities: Vec<Activity>,
    pub groups: Vec<String>,
    pub milestones: Vec<Milestone>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::seed()
    }
}

impl Snapshot {
    /// Builds the fixed initial state.
    pub fn seed() -> Self {
        Self {
            daily_note: String::new(),
            activities: SEED_ACTIVITIES
                .iter()
                .map(|(id, title, group)| Activity::new(*id, *title, *group))
                .collect(),
            groups: SEED_GROUPS.iter().map(|name| (*name).to_string()).collect(),
            milestones: Vec::new(),
        }
    }

    /// Activities that are not archived, in insertion order.
    pub fn active_activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.activities.iter().filter(|activity| activity.is_active())
    }

    /// Looks up one activity by id, archived or not.
    pub fn find_activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Returns `max(existing ids, default 0) + 1`, or `None` on overflow.
    pub fn next_activity_id(&self) -> Option<ActivityId> {
        self.activities
            .iter()
            .map(|activity| activity.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Group the activities screen preselects for new activities.
    pub fn default_group_selection(&self) -> &str {
        self.groups
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_GROUP)
    }

    /// Checks id invariants on snapshots that did not come from the store.
    ///
    /// # Errors
    /// - `NonPositiveActivityId` when an id is zero or negative.
    /// - `ActivityIdExhausted` when an id is `ActivityId::MAX`.
    /// - `DuplicateActivityId` when an id appears twice.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen = HashSet::with_capacity(self.activities.len());
        for activity in &self.activities {
            if activity.id <= 0 {
                return Err(SnapshotError::NonPositiveActivityId(activity.id));
            }
            if activity.id == ActivityId::MAX {
                return Err(SnapshotError::ActivityIdExhausted(activity.id));
            }
            if !seen.insert(activity.id) {
                return Err(SnapshotError::DuplicateActivityId(activity.id));
            }
        }
        Ok(())
    }

    /// Serializes this snapshot for saved-instance state.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a snapshot produced by [`Snapshot::to_json`].
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
