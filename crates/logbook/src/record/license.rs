use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::LicenseStore;
use crate::store::{Keyed, Record};

/// A software license with an expiry instant.
///
/// Validity is not stored. It depends on when you ask, so it is computed
/// against a caller-supplied `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    id: i64,
    name: String,
    expires_at: DateTime<Utc>,
}

impl License {
    /// Create a license.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            expires_at,
        }
    }

    /// Numeric license id.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name of the license.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the license stops being valid.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the license is still valid at `now`.
    ///
    /// The expiry instant itself is already invalid.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Whether the license is valid right now.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

impl Record for License {
    const KIND: &'static str = "License";
}

impl Keyed for License {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }
}

impl LicenseStore {
    /// Licenses still valid at `now`, in insertion order.
    #[must_use]
    pub fn valid_at(&self, now: DateTime<Utc>) -> Vec<&License> {
        self.filter(|license| license.is_valid_at(now))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Months, TimeDelta, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_for_another_year() {
        let expires = now().checked_add_months(Months::new(12)).unwrap();
        let license = License::new(1, "License 1", expires);
        assert!(license.is_valid_at(now()));
    }

    #[test]
    fn test_expired_one_second_ago() {
        let license = License::new(1, "License 1", now() - TimeDelta::seconds(1));
        assert!(!license.is_valid_at(now()));
    }

    #[test]
    fn test_expiry_instant_is_invalid() {
        let license = License::new(1, "License 1", now());
        assert!(!license.is_valid_at(now()));
        assert!(license.is_valid_at(now() - TimeDelta::nanoseconds(1)));
    }

    #[test]
    fn test_validity_depends_on_when_asked() {
        let license = License::new(7, "Trial", now() + TimeDelta::days(30));
        assert!(license.is_valid_at(now()));
        assert!(!license.is_valid_at(now() + TimeDelta::days(31)));
    }

    #[test]
    fn test_is_valid_uses_wall_clock() {
        let future = License::new(1, "Future", Utc::now() + TimeDelta::days(365));
        let past = License::new(2, "Past", Utc::now() - TimeDelta::seconds(1));
        assert!(future.is_valid());
        assert!(!past.is_valid());
    }

    #[test]
    fn test_find_by_id() {
        let mut store = LicenseStore::new();
        store.append(License::new(1, "License 1", now()));
        store.append(License::new(2, "License 2", now()));

        assert_eq!(store.find(&2).unwrap().name(), "License 2");
        let err = store.find(&3).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "License 3 not found");
    }

    #[test]
    fn test_valid_at_filters_expired() {
        let mut store = LicenseStore::new();
        store.append(License::new(1, "Expired", now() - TimeDelta::days(1)));
        store.append(License::new(2, "Active", now() + TimeDelta::days(1)));
        store.append(License::new(3, "Also active", now() + TimeDelta::days(2)));

        let ids: Vec<i64> = store.valid_at(now()).iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
