//! Statistics screen summary.
//!
//! # Responsibility
//! - Count activities and milestones for the statistics screen.
//! - Break active activities down by group label.
//!
//! # Invariants
//! - Per-group counts only include active (unarchived) activities.
//! - Group rows follow group-list order (first occurrence of duplicate names),
//!   then labels used only by activities in first-seen order.

use crate::model::snapshot::Snapshot;
use serde::Serialize;

/// Active activity counts for one group label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub group: String,
    pub active: usize,
    pub done: usize,
}

/// Aggregate counters for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub total_activities: usize,
    pub active_activities: usize,
    /// Done activities among the active ones.
    pub done_activities: usize,
    pub archived_activities: usize,
    pub milestones: usize,
    pub groups: Vec<GroupCount>,
}

impl StatsSummary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut groups: Vec<GroupCount> = Vec::new();
        for name in &snapshot.groups {
            if !groups.iter().any(|row| &row.group == name) {
                groups.push(GroupCount {
                    group: name.clone(),
                    active: 0,
                    done: 0,
                });
            }
        }

        let mut active_activities = 0;
        let mut done_activities = 0;
        for activity in snapshot.active_activities() {
            active_activities += 1;
            if activity.is_done {
                done_activities += 1;
            }

            let index = match groups.iter().position(|row| row.group == activity.group) {
                Some(index) => index,
                None => {
                    groups.push(GroupCount {
                        group: activity.group.clone(),
                        active: 0,
                        done: 0,
                    });
                    groups.len() - 1
                }
            };
            groups[index].active += 1;
            if activity.is_done {
                groups[index].done += 1;
            }
        }

        let total_activities = snapshot.activities.len();
        Self {
            total_activities,
            active_activities,
            done_activities,
            archived_activities: total_activities - active_activities,
            milestones: snapshot.milestones.len(),
            groups,
        }
    }

    /// Whether any unarchived activity exists to chart.
    ///
    /// The streak and record cards currently show their "need more data"
    /// placeholder regardless; this flag is for callers that want to gate on
    /// real data.
    pub fn has_enough_data(&self) -> bool {
        self.active_activities > 0
    }
}
