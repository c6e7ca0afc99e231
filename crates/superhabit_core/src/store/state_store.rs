//! In-memory habit state store.
//!
//! # Responsibility
//! - Own the current [`Snapshot`] and expose the user-facing mutations.
//! - Assign activity ids and milestone dates.
//!
//! # Invariants
//! - New ids are `max(existing) + 1`, so they increase while nothing is reset
//!   or restored. `reset_all` and `restore` can lower the maximum, after which
//!   ids continue from the new maximum and may repeat earlier values.
//! - Adding an activity is ignored once `ActivityId::MAX` is taken.
//! - Titles and group names are trimmed; blank input is ignored.
//! - Mutations are copy-on-write: a snapshot returned earlier is never changed.
//! - Log lines carry ids and lengths only, never user-entered text.

use crate::model::activity::{Activity, ActivityId, DEFAULT_GROUP};
use crate::model::milestone::Milestone;
use crate::model::snapshot::{Snapshot, SnapshotError};
use crate::store::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use std::sync::Arc;

/// Single-writer owner of the habit state.
pub struct StateStore<C: Clock = SystemClock> {
    current: Arc<Snapshot>,
    clock: C,
}

impl StateStore<SystemClock> {
    /// Creates a seeded store dated by the device clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StateStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StateStore<C> {
    /// Creates a seeded store using the provided date source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            current: Arc::new(Snapshot::seed()),
            clock,
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Replaces the daily note. Accepts any text, including empty.
    pub fn set_daily_note(&mut self, text: impl Into<String>) -> Arc<Snapshot> {
        let text = text.into();
        debug!(
            "event=daily_note_set module=store status=ok chars={}",
            text.chars().count()
        );
        self.edit().daily_note = text;
        self.snapshot()
    }

    /// Sets the done flag of one activity.
    ///
    /// Unknown ids leave the state untouched.
    pub fn toggle_activity(&mut self, id: ActivityId, done: bool) -> Arc<Snapshot> {
        let Some(index) = self.position_of(id) else {
            debug!("event=activity_toggle module=store status=skipped reason=unknown_id id={id}");
            return self.snapshot();
        };
        self.edit().activities[index].is_done = done;
        debug!("event=activity_toggle module=store status=ok id={id} done={done}");
        self.snapshot()
    }

    /// Appends an activity to the default `Other` group.
    pub fn add_quick_activity(&mut self, title: &str) -> Arc<Snapshot> {
        self.add_activity(title, DEFAULT_GROUP)
    }

    /// Appends a new group name.
    ///
    /// Duplicates are allowed; blank names are ignored.
    pub fn add_group(&mut self, name: &str) -> Arc<Snapshot> {
        let Some(name) = normalize_label(name) else {
            debug!("event=group_add module=store status=skipped reason=blank");
            return self.snapshot();
        };
        let snapshot = self.edit();
        snapshot.groups.push(name);
        debug!(
            "event=group_add module=store status=ok group_count={}",
            snapshot.groups.len()
        );
        self.snapshot()
    }

    /// Appends a new open activity under `group`.
    ///
    /// `group` is stored as given (trimmed) without checking the group list;
    /// a blank group falls back to `Other`. Blank titles are ignored.
    pub fn add_activity(&mut self, title: &str, group: &str) -> Arc<Snapshot> {
        let Some(title) = normalize_label(title) else {
            debug!("event=activity_add module=store status=skipped reason=blank_title");
            return self.snapshot();
        };
        let Some(id) = self.current.next_activity_id() else {
            warn!("event=activity_add module=store status=skipped reason=id_exhausted");
            return self.snapshot();
        };
        let group = normalize_label(group).unwrap_or_else(|| DEFAULT_GROUP.to_string());

        let snapshot = self.edit();
        snapshot.activities.push(Activity::new(id, title, group));
        debug!(
            "event=activity_add module=store status=ok id={id} activity_count={}",
            snapshot.activities.len()
        );
        self.snapshot()
    }

    /// Archives one activity. Idempotent; unknown ids are ignored.
    pub fn archive_activity(&mut self, id: ActivityId) -> Arc<Snapshot> {
        let Some(index) = self.position_of(id) else {
            debug!("event=activity_archive module=store status=skipped reason=unknown_id id={id}");
            return self.snapshot();
        };
        if self.current.activities[index].is_archived {
            return self.snapshot();
        }
        self.edit().activities[index].archive();
        debug!("event=activity_archive module=store status=ok id={id}");
        self.snapshot()
    }

    /// Appends a milestone dated today.
    pub fn add_milestone(&mut self, title: &str) -> Arc<Snapshot> {
        let Some(title) = normalize_label(title) else {
            debug!("event=milestone_add module=store status=skipped reason=blank_title");
            return self.snapshot();
        };
        let date = self.clock.today();
        let snapshot = self.edit();
        snapshot.milestones.push(Milestone::new(date, title));
        debug!(
            "event=milestone_add module=store status=ok date={date} milestone_count={}",
            snapshot.milestones.len()
        );
        self.snapshot()
    }

    /// Restores every collection to the seed state in one step.
    pub fn reset_all(&mut self) -> Arc<Snapshot> {
        self.current = Arc::new(Snapshot::seed());
        info!("event=state_reset module=store status=ok");
        self.snapshot()
    }

    /// Replaces the whole state with a previously saved snapshot.
    ///
    /// Id assignment continues from the restored maximum id, which may be
    /// lower than ids this store already issued.
    ///
    /// # Errors
    /// - Returns the validation error when the snapshot breaks id invariants;
    ///   the current state is kept in that case.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<Arc<Snapshot>, SnapshotError> {
        if let Err(err) = snapshot.validate() {
            info!("event=state_restore module=store status=error error={err}");
            return Err(err);
        }
        info!(
            "event=state_restore module=store status=ok activity_count={} group_count={} milestone_count={}",
            snapshot.activities.len(),
            snapshot.groups.len(),
            snapshot.milestones.len()
        );
        self.current = Arc::new(snapshot);
        Ok(self.snapshot())
    }

    fn position_of(&self, id: ActivityId) -> Option<usize> {
        self.current
            .activities
            .iter()
            .position(|activity| activity.id == id)
    }

    fn edit(&mut self) -> &mut Snapshot {
        Arc::make_mut(&mut self.current)
    }
}

/// Trims a title or group name, returning `None` when nothing is left.
pub(crate) fn normalize_label(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
