//! Trash retention countdown.
//!
//! Soft-deleted records stay in the trash for [`TRASH_WINDOW_DAYS`] before
//! the backend purges them. The countdown uses exact timestamps on both
//! sides of the comparison; calendar-midnight normalization is not applied.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Days a soft-deleted record is kept before permanent purge.
pub const TRASH_WINDOW_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// When the backend is expected to purge a record deleted at `deleted_at`.
pub fn purge_at(deleted_at: Timestamp) -> Timestamp {
    deleted_at + Duration::days(TRASH_WINDOW_DAYS)
}

/// `max(0, ceil((deleted_at + 30d - now) / 1d))`.
pub fn days_remaining(deleted_at: Timestamp, now: Timestamp) -> i64 {
    let millis = (purge_at(deleted_at) - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    let partial = i64::from(millis.rem_euclid(MILLIS_PER_DAY) > 0);
    (whole + partial).max(0)
}

/// True once the countdown reaches zero. The record may still be listed
/// until the backend purges it.
pub fn is_expired(deleted_at: Timestamp, now: Timestamp) -> bool {
    days_remaining(deleted_at, now) == 0
}

/// A soft-deleted record as listed in the trash view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashedRecord {
    pub id: DbId,
    pub entity_type: String,
    pub label: String,
    pub deleted_at: Timestamp,
}

impl TrashedRecord {
    pub fn days_remaining(&self, now: Timestamp) -> i64 {
        days_remaining(self.deleted_at, now)
    }
}
