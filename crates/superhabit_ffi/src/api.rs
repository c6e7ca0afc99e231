//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the habit store operations to Dart via FRB.
//! - Flatten snapshots into plain DTOs the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide store; the mutex serializes every mutation.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.

use log::warn;
use superhabit_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Activity, Milestone, Snapshot, StateStore, StatsSummary,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static HABIT_STORE: OnceLock<Mutex<StateStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Activity row as rendered by the home and activities screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
    pub group: String,
    pub is_archived: bool,
}

/// Milestone row for the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneItem {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub title: String,
}

/// Full state pushed to the UI after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSnapshot {
    pub daily_note: String,
    /// Every activity, archived included, in insertion order.
    pub activities: Vec<ActivityItem>,
    /// Unarchived activities only; what list screens display.
    pub active_activities: Vec<ActivityItem>,
    pub groups: Vec<String>,
    pub milestones: Vec<MilestoneItem>,
    /// Group the activities screen preselects.
    pub default_group: String,
}

/// Per-group counters for the statistics screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStatsItem {
    pub group: String,
    pub active: u32,
    pub done: u32,
}

/// Statistics screen envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitStats {
    pub total_activities: u32,
    pub active_activities: u32,
    pub done_activities: u32,
    pub archived_activities: u32,
    pub milestones: u32,
    pub groups: Vec<GroupStatsItem>,
    /// `false` when no unarchived activity exists.
    pub has_enough_data: bool,
}

/// Result envelope for saved-state restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResponse {
    pub ok: bool,
    pub message: String,
    /// Current state after the call (unchanged on failure).
    pub snapshot: HabitSnapshot,
}

/// Returns the current state without mutating it.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_snapshot() -> HabitSnapshot {
    to_habit_snapshot(&lock_store().snapshot())
}

/// Replaces the daily note on every keystroke.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_set_daily_note(text: String) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().set_daily_note(text))
}

/// Sets the done checkbox of one activity; unknown ids are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_toggle_activity(id: i64, done: bool) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().toggle_activity(id, done))
}

/// Home screen quick add; lands in the `Other` group.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_add_quick_activity(title: String) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().add_quick_activity(title.as_str()))
}

/// Appends a group name; blank names are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_add_group(name: String) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().add_group(name.as_str()))
}

/// Adds an activity under a caller-chosen group; blank titles are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_add_activity(title: String, group: String) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().add_activity(title.as_str(), group.as_str()))
}

/// Archives (soft-deletes) one activity.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_archive_activity(id: i64) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().archive_activity(id))
}

/// Records a milestone dated today.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_add_milestone(title: String) -> HabitSnapshot {
    to_habit_snapshot(&lock_store().add_milestone(title.as_str()))
}

/// "Reset all data" menu action.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_reset_all() -> HabitSnapshot {
    to_habit_snapshot(&lock_store().reset_all())
}

/// Counters for the statistics screen.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_stats() -> HabitStats {
    let summary = StatsSummary::from_snapshot(&lock_store().snapshot());
    to_habit_stats(&summary)
}

/// Serializes the current state for the UI's saved-instance bundle.
///
/// # FFI contract
/// - Returns an empty string only if serialization fails, which is logged.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_export_state() -> String {
    match lock_store().snapshot().to_json() {
        Ok(json) => json,
        Err(err) => {
            warn!("event=state_export module=ffi status=error error={err}");
            String::new()
        }
    }
}

/// Restores state produced by [`habit_export_state`].
///
/// # FFI contract
/// - Invalid payloads leave the current state untouched and report `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn habit_restore_state(json: String) -> RestoreResponse {
    let mut store = lock_store();
    let result = Snapshot::from_json(json.as_str()).and_then(|parsed| store.restore(parsed));
    match result {
        Ok(snapshot) => RestoreResponse {
            ok: true,
            message: "State restored.".to_string(),
            snapshot: to_habit_snapshot(&snapshot),
        },
        Err(err) => RestoreResponse {
            ok: false,
            message: format!("habit_restore_state failed: {err}"),
            snapshot: to_habit_snapshot(&store.snapshot()),
        },
    }
}

fn lock_store() -> MutexGuard<'static, StateStore> {
    HABIT_STORE
        .get_or_init(|| Mutex::new(StateStore::new()))
        .lock()
        // A panicking caller cannot leave a half-applied snapshot behind.
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_habit_snapshot(snapshot: &Snapshot) -> HabitSnapshot {
    HabitSnapshot {
        daily_note: snapshot.daily_note.clone(),
        activities: snapshot.activities.iter().map(to_activity_item).collect(),
        active_activities: snapshot.active_activities().map(to_activity_item).collect(),
        groups: snapshot.groups.clone(),
        milestones: snapshot.milestones.iter().map(to_milestone_item).collect(),
        default_group: snapshot.default_group_selection().to_string(),
    }
}

fn to_activity_item(activity: &Activity) -> ActivityItem {
    ActivityItem {
        id: activity.id,
        title: activity.title.clone(),
        is_done: activity.is_done,
        group: activity.group.clone(),
        is_archived: activity.is_archived,
    }
}

fn to_milestone_item(milestone: &Milestone) -> MilestoneItem {
    MilestoneItem {
        date: milestone.date.format("%Y-%m-%d").to_string(),
        title: milestone.title.clone(),
    }
}

fn to_habit_stats(summary: &StatsSummary) -> HabitStats {
    HabitStats {
        total_activities: count_u32(summary.total_activities),
        active_activities: count_u32(summary.active_activities),
        done_activities: count_u32(summary.done_activities),
        archived_activities: count_u32(summary.archived_activities),
        milestones: count_u32(summary.milestones),
        groups: summary
            .groups
            .iter()
            .map(|row| GroupStatsItem {
                group: row.group.clone(),
                active: count_u32(row.active),
                done: count_u32(row.done),
            })
            .collect(),
        has_enough_data: summary.has_enough_data(),
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
