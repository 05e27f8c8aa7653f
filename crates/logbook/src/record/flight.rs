use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Keyed, Record, Timed};

/// A scheduled flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    number: String,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
}

impl Flight {
    /// Create a flight. Arrival is not checked against departure.
    #[must_use]
    pub fn new(number: impl Into<String>, departure: DateTime<Utc>, arrival: DateTime<Utc>) -> Self {
        Self {
            number: number.into(),
            departure,
            arrival,
        }
    }

    /// The flight number, e.g. `ABC123`.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl Record for Flight {
    const KIND: &'static str = "Flight";
}

impl Keyed for Flight {
    type Key = str;

    fn key(&self) -> &str {
        &self.number
    }
}

impl Timed for Flight {
    fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }
}
