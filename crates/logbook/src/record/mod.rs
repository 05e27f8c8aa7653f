//! Record kinds held by logbook stores.
//!
//! Every record is an immutable value: fields are set by the constructor and
//! only exposed through accessors.

mod flight;
mod license;
mod task;
mod travel;

pub use flight::Flight;
pub use license::License;
pub use task::{local_day, Task};
pub use travel::Travel;

use crate::store::RecordStore;

/// A store of flights, looked up by flight number.
pub type FlightStore = RecordStore<Flight>;

/// A store of licenses, looked up by numeric id.
pub type LicenseStore = RecordStore<License>;

/// A store of tasks.
pub type TaskStore = RecordStore<Task>;

/// A store of travel legs making up an itinerary.
pub type TravelStore = RecordStore<Travel>;
