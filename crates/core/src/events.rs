//! Events and carpools: capacity views over remote records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rates::Occupancy;
use crate::status::EventStatus;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub status: EventStatus,
    pub capacity: i64,
    #[serde(default)]
    pub enrolled: i64,
    pub starts_on: NaiveDate,
}

impl Event {
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::new(self.capacity, self.enrolled)
    }

    /// Published and not yet full. Over-booking is still possible because
    /// the backend does not block it.
    pub fn has_open_spots(&self) -> bool {
        self.status.accepts_signups() && self.occupancy().remaining() > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carpool {
    pub id: DbId,
    pub driver_name: String,
    pub seats: i64,
    /// Camper ids riding along.
    #[serde(default)]
    pub riders: Vec<DbId>,
}

impl Carpool {
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::new(self.seats, self.riders.len() as i64)
    }
}
