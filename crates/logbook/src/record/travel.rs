use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, Timed};

/// One leg of a travel itinerary.
///
/// Legs have no key; a travel store is only ever listed or totalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travel {
    source: String,
    destination: String,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
}

impl Travel {
    /// Create a travel leg.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            departure,
            arrival,
        }
    }

    /// Where the leg starts.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where the leg ends.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Record for Travel {
    const KIND: &'static str = "Travel";
}

impl Timed for Travel {
    fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }
}
