//! Generic append-only record store.
//!
//! A [`RecordStore`] keeps records of one kind in insertion order. Records
//! are never updated or removed once appended. Lookup is a linear scan that
//! returns the first match, so duplicate keys are legal and later duplicates
//! are shadowed.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A kind of record that can live in a [`RecordStore`].
pub trait Record {
    /// Human name of the record kind, used in errors and logs.
    const KIND: &'static str;
}

/// A record with a designated lookup key.
///
/// Only keyed records get [`RecordStore::find`]; stores of unkeyed records
/// simply have no lookup method.
pub trait Keyed: Record {
    /// The key type. Compared with exact equality.
    type Key: PartialEq + fmt::Display + ?Sized;

    /// The record's key.
    fn key(&self) -> &Self::Key;
}

/// A record spanning a departure and an arrival instant.
pub trait Timed {
    /// When the record starts.
    fn departure(&self) -> DateTime<Utc>;

    /// When the record ends.
    fn arrival(&self) -> DateTime<Utc>;

    /// Arrival minus departure.
    ///
    /// Not validated: arriving before departing yields a negative duration.
    fn duration(&self) -> TimeDelta {
        self.arrival() - self.departure()
    }
}

/// An insertion-ordered, append-only collection of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the store.
    pub fn append(&mut self, record: T) {
        self.records.push(record);
        trace!(kind = T::KIND, len = self.records.len(), "Appended record");
    }

    /// All records, in the order they were appended.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ordered subsequence of records matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let matched: Vec<&T> = self.records.iter().filter(|r| predicate(*r)).collect();
        trace!(
            kind = T::KIND,
            scanned = self.records.len(),
            matched = matched.len(),
            "Filtered records"
        );
        matched
    }
}

impl<T: Keyed> RecordStore<T> {
    /// Find the first record whose key equals `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record carries the key.
    pub fn find(&self, key: &T::Key) -> Result<&T> {
        match self.records.iter().find(|r| r.key() == key) {
            Some(record) => {
                debug!(kind = T::KIND, %key, "Found record");
                Ok(record)
            }
            None => {
                debug!(kind = T::KIND, %key, "No record with key");
                Err(Error::not_found(T::KIND, key))
            }
        }
    }
}

impl<T: Record + Timed> RecordStore<T> {
    /// Sum of every record's duration. Zero for an empty store.
    ///
    /// Saturates at `TimeDelta::MAX` / `TimeDelta::MIN` instead of overflowing.
    #[must_use]
    pub fn total_duration(&self) -> TimeDelta {
        self.records.iter().fold(TimeDelta::zero(), |total, record| {
            let duration = record.duration();
            total.checked_add(&duration).unwrap_or(if duration < TimeDelta::zero() {
                TimeDelta::MIN
            } else {
                TimeDelta::MAX
            })
        })
    }
}

impl<T> FromIterator<T> for RecordStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for RecordStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        code: String,
        seq: u32,
    }

    impl Entry {
        fn new(code: &str, seq: u32) -> Self {
            Self {
                code: code.to_string(),
                seq,
            }
        }
    }

    impl Record for Entry {
        const KIND: &'static str = "Entry";
    }

    impl Keyed for Entry {
        type Key = str;

        fn key(&self) -> &str {
            &self.code
        }
    }

    struct Leg {
        hours: i64,
    }

    impl Record for Leg {
        const KIND: &'static str = "Leg";
    }

    impl Timed for Leg {
        fn departure(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
        }

        fn arrival(&self) -> DateTime<Utc> {
            self.departure() + TimeDelta::hours(self.hours)
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: RecordStore<Entry> = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        crate::logging::init_test_logging();
        let mut store = RecordStore::new();
        for (i, code) in ["C", "A", "B", "A"].iter().enumerate() {
            store.append(Entry::new(code, u32::try_from(i).unwrap()));
        }

        let seqs: Vec<u32> = store.all().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_find_returns_first_match() {
        let store: RecordStore<Entry> = vec![
            Entry::new("A", 1),
            Entry::new("B", 2),
            Entry::new("A", 3),
        ]
        .into_iter()
        .collect();

        let found = store.find("A").unwrap();
        assert_eq!(found.seq, 1);
        assert_eq!(store.find("B").unwrap().seq, 2);
    }

    #[test]
    fn test_find_missing_key() {
        let mut store = RecordStore::new();
        store.append(Entry::new("A", 1));

        let err = store.find("Z").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entry Z not found");
    }

    #[test]
    fn test_find_on_empty_store() {
        let store: RecordStore<Entry> = RecordStore::new();
        for key in ["", "A", "anything at all"] {
            assert!(store.find(key).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn test_find_is_exact() {
        let mut store = RecordStore::new();
        store.append(Entry::new("abc", 1));

        assert!(store.find("ABC").is_err());
        assert!(store.find("ab").is_err());
        assert!(store.find("abc ").is_err());
    }

    #[test]
    fn test_filter_keeps_order() {
        let store: RecordStore<Entry> = (1..=6).map(|i| Entry::new("X", i)).collect();

        let even: Vec<u32> = store.filter(|e| e.seq % 2 == 0).iter().map(|e| e.seq).collect();
        assert_eq!(even, vec![2, 4, 6]);
        assert!(store.filter(|_| false).is_empty());
    }

    #[test]
    fn test_total_duration_empty() {
        let store: RecordStore<Leg> = RecordStore::new();
        assert_eq!(store.total_duration(), TimeDelta::zero());
    }

    #[test]
    fn test_total_duration_sums_legs() {
        let store: RecordStore<Leg> = [5, 2, 3].into_iter().map(|hours| Leg { hours }).collect();
        assert_eq!(store.total_duration(), TimeDelta::hours(10));
    }

    #[test]
    fn test_total_duration_counts_negative_legs() {
        let store: RecordStore<Leg> = [4, -1].into_iter().map(|hours| Leg { hours }).collect();
        assert_eq!(store.total_duration(), TimeDelta::hours(3));
    }

    struct Span {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    }

    impl Record for Span {
        const KIND: &'static str = "Span";
    }

    impl Timed for Span {
        fn departure(&self) -> DateTime<Utc> {
            self.start
        }

        fn arrival(&self) -> DateTime<Utc> {
            self.end
        }
    }

    #[test]
    fn test_total_duration_saturates() {
        let forward = || Span {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        };
        let store: RecordStore<Span> = (0..1000).map(|_| forward()).collect();
        assert_eq!(store.total_duration(), TimeDelta::MAX);

        let backward: RecordStore<Span> = (0..1000)
            .map(|_| Span {
                start: DateTime::<Utc>::MAX_UTC,
                end: DateTime::<Utc>::MIN_UTC,
            })
            .collect();
        assert_eq!(backward.total_duration(), TimeDelta::MIN);
    }

    #[test]
    fn test_extend_and_iterate() {
        let mut store = RecordStore::new();
        store.append(Entry::new("A", 1));
        store.extend([Entry::new("B", 2), Entry::new("C", 3)]);

        let codes: Vec<&str> = (&store).into_iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
        assert_eq!(store.iter().count(), 3);
    }
}
