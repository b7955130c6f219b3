//! Daily digest: the dashboard numbers for one day, built from the API.
//!
//! Each section is fetched as its own query. A failed query leaves its
//! section empty and is listed in `errors`; the rest of the digest is
//! still produced.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use camp_core::attendance::{heatmap, AttendanceRecord, AttendanceSummary, HeatmapCell};
use camp_core::calendar::TrailingWindow;
use camp_core::filters::ListFilter;
use camp_core::leaderboard::{Leaderboard, RankedEntry};
use camp_core::retention::days_remaining;
use camp_core::status::{EventStatus, Tone};
use camp_core::types::{DbId, Timestamp};

use crate::api::CampApi;
use crate::query::QueryState;

/// Trash entries at or below this many days are flagged.
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// How far ahead upcoming events are listed.
pub const UPCOMING_EVENT_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize)]
pub struct EventLine {
    pub id: DbId,
    pub name: String,
    pub starts_on: NaiveDate,
    pub status: &'static str,
    pub tone: Tone,
    /// Unclamped occupancy label.
    pub percent: i64,
    /// Occupancy clamped for the bar.
    pub bar_width: u8,
    pub overbooked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrashLine {
    pub id: DbId,
    pub entity_type: String,
    pub label: String,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyDigest {
    pub date: NaiveDate,
    pub attendance: AttendanceSummary,
    pub heatmap: Vec<HeatmapCell>,
    pub podium: Vec<RankedEntry>,
    pub upcoming_events: Vec<EventLine>,
    pub expiring_trash: Vec<TrashLine>,
    pub errors: Vec<String>,
}

/// Fetch every section for `date` and derive the digest.
pub async fn build_digest<A>(api: &A, date: NaiveDate, now: Timestamp) -> DailyDigest
where
    A: CampApi + ?Sized,
{
    let window = TrailingWindow::ending(date);
    let attendance_filter = ListFilter::new().between(window.start(), date);
    let event_filter = ListFilter::new()
        .status(EventStatus::Published.as_str())
        .between(date, date + Duration::days(UPCOMING_EVENT_DAYS));

    let (attendance, leaderboard, events, trash) = tokio::join!(
        QueryState::fetch("attendance", api.list_attendance(&attendance_filter)),
        QueryState::fetch("leaderboard", api.leaderboard()),
        QueryState::fetch("events", api.list_events(&event_filter)),
        QueryState::fetch("trash", api.list_trash()),
    );

    let mut errors = Vec::new();
    for (name, error) in [
        ("attendance", &attendance.error),
        ("leaderboard", &leaderboard.error),
        ("events", &events.error),
        ("trash", &trash.error),
    ] {
        if let Some(e) = error {
            errors.push(format!("{name}: {e}"));
        }
    }

    let today: Vec<AttendanceRecord> = attendance
        .items()
        .iter()
        .filter(|r| r.date == date)
        .cloned()
        .collect();

    let board = Leaderboard::from_server(leaderboard.data_or_default());

    let upcoming_events = events
        .items()
        .iter()
        .map(|e| {
            let occupancy = e.occupancy();
            EventLine {
                id: e.id,
                name: e.name.clone(),
                starts_on: e.starts_on,
                status: e.status.label(),
                tone: e.status.tone(),
                percent: occupancy.percent(),
                bar_width: occupancy.bar_width(),
                overbooked: occupancy.is_overbooked(),
            }
        })
        .collect();

    let expiring_trash = trash
        .items()
        .iter()
        .map(|t| TrashLine {
            id: t.id,
            entity_type: t.entity_type.clone(),
            label: t.label.clone(),
            days_remaining: days_remaining(t.deleted_at, now),
        })
        .filter(|line| line.days_remaining <= EXPIRING_SOON_DAYS)
        .collect();

    DailyDigest {
        date,
        attendance: AttendanceSummary::from_records(&today),
        heatmap: heatmap(attendance.items(), &window),
        podium: board.podium().to_vec(),
        upcoming_events,
        expiring_trash,
        errors,
    }
}
