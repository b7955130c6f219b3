//! Camp domain logic shared by the client and its tooling.
//!
//! Everything here is a pure function or plain value over data already
//! fetched from the camp API. No I/O, no clocks except the explicit
//! `*_today()` / `current()` constructors.

pub mod attendance;
pub mod calendar;
pub mod camper;
pub mod error;
pub mod events;
pub mod filters;
pub mod leaderboard;
pub mod messages;
pub mod packing;
pub mod photos;
pub mod rates;
pub mod retention;
pub mod status;
pub mod types;
