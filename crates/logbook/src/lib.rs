//! `logbook` - Small in-memory record books
//!
//! This library provides an append-only, insertion-ordered [`RecordStore`]
//! and four record kinds that live in it: flights, licenses, tasks and
//! travel legs. Stores support lookup by key for keyed records, ordered
//! filtering, and duration totals for records with a departure and arrival.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod record;
pub mod report;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{
    Flight, FlightStore, License, LicenseStore, Task, TaskStore, Travel, TravelStore,
};
pub use store::{Keyed, Record, RecordStore, Timed};
