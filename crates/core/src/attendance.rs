//! Attendance tracking: statuses, quick stats, roster sheets, and the
//! 30-day heatmap.
//!
//! Attendance records are only ever written through a single bulk request
//! covering a whole roster for one activity and date. [`AttendanceSheet`]
//! is the in-flight edit state that produces that request.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::TrailingWindow;
use crate::camper::Camper;
use crate::error::CoreError;
use crate::rates::{attendance_rate, rate};
use crate::status::{unknown_key, Tone};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Excused => "Excused",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Present => Tone::Success,
            Self::Absent => Tone::Danger,
            Self::Late => Tone::Warning,
            Self::Excused => Tone::Info,
        }
    }

    /// Late arrivals count towards the attendance rate.
    pub fn counts_as_attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

impl FromStr for AttendanceStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            other => Err(unknown_key("attendance status", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One camper's line in a bulk save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAttendanceEntry {
    pub camper_id: DbId,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request body for saving a whole roster for one activity and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAttendanceRequest {
    pub activity_id: DbId,
    pub date: NaiveDate,
    pub records: Vec<BulkAttendanceEntry>,
}

// ---------------------------------------------------------------------------
// Quick stats
// ---------------------------------------------------------------------------

/// Counts per status plus the attendance rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceSummary {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    pub rate: i64,
}

impl AttendanceSummary {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AttendanceStatus>,
    {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Excused => summary.excused += 1,
            }
        }
        summary.rate = attendance_rate(summary.present, summary.late, summary.total);
        summary
    }

    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        Self::from_statuses(records.iter().map(|r| r.status))
    }
}

// ---------------------------------------------------------------------------
// Roster sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub camper_id: DbId,
    pub camper_name: String,
    pub status: AttendanceStatus,
    pub notes: String,
}

/// Editable attendance for one activity and date, in roster order.
#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    activity_id: DbId,
    date: NaiveDate,
    rows: Vec<SheetRow>,
}

impl AttendanceSheet {
    /// Every camper starts as present.
    pub fn new(activity_id: DbId, date: NaiveDate, roster: &[Camper]) -> Self {
        let rows = roster
            .iter()
            .map(|c| SheetRow {
                camper_id: c.id,
                camper_name: c.full_name(),
                status: AttendanceStatus::default(),
                notes: String::new(),
            })
            .collect();
        Self {
            activity_id,
            date,
            rows,
        }
    }

    /// Start from previously saved records; campers without a record keep
    /// the default status.
    pub fn with_existing(
        activity_id: DbId,
        date: NaiveDate,
        roster: &[Camper],
        existing: &[AttendanceRecord],
    ) -> Self {
        let mut sheet = Self::new(activity_id, date, roster);
        let saved: HashMap<DbId, &AttendanceRecord> = existing
            .iter()
            .filter(|r| r.activity_id == activity_id && r.date == date)
            .map(|r| (r.camper_id, r))
            .collect();
        for row in &mut sheet.rows {
            if let Some(record) = saved.get(&row.camper_id) {
                row.status = record.status;
                row.notes = record.notes.clone().unwrap_or_default();
            }
        }
        sheet
    }

    pub fn activity_id(&self) -> DbId {
        self.activity_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    fn row_mut(&mut self, camper_id: DbId) -> Result<&mut SheetRow, CoreError> {
        self.rows
            .iter_mut()
            .find(|r| r.camper_id == camper_id)
            .ok_or(CoreError::NotFound {
                entity: "camper",
                id: camper_id,
            })
    }

    pub fn mark(&mut self, camper_id: DbId, status: AttendanceStatus) -> Result<(), CoreError> {
        self.row_mut(camper_id)?.status = status;
        Ok(())
    }

    pub fn mark_all(&mut self, status: AttendanceStatus) {
        for row in &mut self.rows {
            row.status = status;
        }
    }

    pub fn set_note(&mut self, camper_id: DbId, notes: impl Into<String>) -> Result<(), CoreError> {
        self.row_mut(camper_id)?.notes = notes.into();
        Ok(())
    }

    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_statuses(self.rows.iter().map(|r| r.status))
    }

    /// Build the bulk save body. Blank notes are omitted.
    pub fn to_request(&self) -> BulkAttendanceRequest {
        let records = self
            .rows
            .iter()
            .map(|r| {
                let notes = r.notes.trim();
                BulkAttendanceEntry {
                    camper_id: r.camper_id,
                    status: r.status,
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                }
            })
            .collect();
        BulkAttendanceRequest {
            activity_id: self.activity_id,
            date: self.date,
            records,
        }
    }
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

/// Attendance for one day of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub attended: i64,
    pub total: i64,
    pub rate: i64,
}

/// One cell per window day, oldest first. Records outside the window are
/// ignored; days without records are zero cells.
pub fn heatmap(records: &[AttendanceRecord], window: &TrailingWindow) -> Vec<HeatmapCell> {
    let mut per_day: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
    for record in records.iter().filter(|r| window.contains(r.date)) {
        let counts = per_day.entry(record.date).or_default();
        counts.1 += 1;
        if record.status.counts_as_attended() {
            counts.0 += 1;
        }
    }

    window
        .days()
        .map(|date| {
            let (attended, total) = per_day.get(&date).copied().unwrap_or_default();
            HeatmapCell {
                date,
                attended,
                total,
                rate: rate(attended, total),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
