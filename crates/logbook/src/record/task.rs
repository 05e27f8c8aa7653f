use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::record::TaskStore;
use crate::store::Record;

/// A to-do item with a due instant.
///
/// Tasks carry an id but are never looked up by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: i64,
    description: String,
    due: DateTime<Utc>,
}

impl Task {
    /// Create a task.
    #[must_use]
    pub fn new(id: i64, description: impl Into<String>, due: DateTime<Utc>) -> Self {
        Self {
            id,
            description: description.into(),
            due,
        }
    }

    /// Task id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// What needs doing.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the task is due.
    #[must_use]
    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }

    /// The calendar day the task is due on, as seen from `offset`.
    ///
    /// `None` when shifting by `offset` leaves chrono's representable range.
    #[must_use]
    pub fn due_day(&self, offset: FixedOffset) -> Option<NaiveDate> {
        local_day(self.due, offset)
    }

    /// Whether the task falls on `day`. Time of day is ignored.
    #[must_use]
    pub fn is_due_on(&self, day: NaiveDate, offset: FixedOffset) -> bool {
        self.due_day(offset) == Some(day)
    }
}

impl Record for Task {
    const KIND: &'static str = "Task";
}

impl TaskStore {
    /// Tasks due on `day`, in insertion order.
    #[must_use]
    pub fn due_on(&self, day: NaiveDate, offset: FixedOffset) -> Vec<&Task> {
        self.filter(|task| task.is_due_on(day, offset))
    }

    /// Tasks due on the same calendar day as `now`.
    #[must_use]
    pub fn due_today(&self, now: DateTime<Utc>, offset: FixedOffset) -> Vec<&Task> {
        match local_day(now, offset) {
            Some(today) => self.due_on(today, offset),
            None => Vec::new(),
        }
    }
}

/// Calendar day of `instant` as seen from `offset`.
///
/// `None` when the shifted instant falls outside chrono's representable range.
#[must_use]
pub fn local_day(instant: DateTime<Utc>, offset: FixedOffset) -> Option<NaiveDate> {
    instant
        .naive_utc()
        .checked_add_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
        .map(|local| local.date())
}
