//! Sample record books used by the `logbook` demonstration commands.
//!
//! The data is fixed, except license expiry which is relative to the
//! caller's `now` so the licenses stay valid whenever the demo runs.

use chrono::{DateTime, Months, TimeZone, Utc};

use crate::record::{
    Flight, FlightStore, License, LicenseStore, Task, TaskStore, Travel, TravelStore,
};

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Two flights on the first days of 2022.
#[must_use]
pub fn flights() -> FlightStore {
    let mut store = FlightStore::new();
    store.append(Flight::new("ABC123", utc(2022, 1, 1, 8), utc(2022, 1, 1, 10)));
    store.append(Flight::new("DEF456", utc(2022, 1, 2, 12), utc(2022, 1, 2, 14)));
    store
}

/// Two licenses expiring one and two calendar years after `now`.
#[must_use]
pub fn licenses(now: DateTime<Utc>) -> LicenseStore {
    let years = |n: u32| now.checked_add_months(Months::new(12 * n)).unwrap_or(now);

    let mut store = LicenseStore::new();
    store.append(License::new(1, "License 1", years(1)));
    store.append(License::new(2, "License 2", years(2)));
    store
}

/// Three tasks, two of them due on 2022-01-15.
#[must_use]
pub fn tasks() -> TaskStore {
    let mut store = TaskStore::new();
    store.append(Task::new(1, "Complete project", utc(2022, 1, 15, 0)));
    store.append(Task::new(2, "Submit report", utc(2022, 1, 20, 0)));
    store.append(Task::new(3, "Attend meeting", utc(2022, 1, 15, 15)));
    store
}

/// A three-leg trip from New York to Rome, ten hours in the air.
#[must_use]
pub fn travels() -> TravelStore {
    let mut store = TravelStore::new();
    store.append(Travel::new("New York", "London", utc(2022, 1, 1, 10), utc(2022, 1, 1, 15)));
    store.append(Travel::new("London", "Paris", utc(2022, 1, 2, 8), utc(2022, 1, 2, 10)));
    store.append(Travel::new("Paris", "Rome", utc(2022, 1, 3, 12), utc(2022, 1, 3, 15)));
    store
}
