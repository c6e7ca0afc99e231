//! Calendar milestone ("important day") model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated title shown on the calendar screen. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Local calendar date; serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub title: String,
}

impl Milestone {
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
        }
    }
}
