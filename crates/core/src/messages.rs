//! Camper messaging: weekly draft planning and bunk grouping.
//!
//! A [`WeekPlanner`] holds unsent per-day drafts for the Monday→Sunday week
//! being viewed. Drafts never outlive the week: navigating to another week
//! or a successful submit clears them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{to_iso, Week};
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a single message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Group label for messages whose camper has no bunk.
pub const UNASSIGNED_BUNK: &str = "Unassigned";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for scheduling one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camper_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bunk: Option<String>,
    pub send_on: NaiveDate,
    pub body: String,
}

/// A message as listed on the daily messages page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMessage {
    pub id: DbId,
    pub camper_id: DbId,
    pub camper_name: String,
    #[serde(default)]
    pub bunk: Option<String>,
    pub send_on: NaiveDate,
    pub body: String,
}

/// Validate a message body: non-blank and within [`MAX_MESSAGE_CHARS`].
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation("Message must not be empty".into()));
    }
    let chars = body.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "Message is {chars} characters; the limit is {MAX_MESSAGE_CHARS}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Week planner
// ---------------------------------------------------------------------------

/// Per-day drafts for one camper across the week being viewed.
#[derive(Debug, Clone)]
pub struct WeekPlanner {
    camper_id: DbId,
    week: Week,
    drafts: BTreeMap<NaiveDate, String>,
}

impl WeekPlanner {
    pub fn new(camper_id: DbId, week: Week) -> Self {
        Self {
            camper_id,
            week,
            drafts: BTreeMap::new(),
        }
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn camper_id(&self) -> DbId {
        self.camper_id
    }

    /// Set the draft for `date`. Blank text removes it.
    pub fn set_draft(&mut self, date: NaiveDate, text: impl Into<String>) -> Result<(), CoreError> {
        if !self.week.contains(date) {
            return Err(CoreError::Validation(format!(
                "{} is outside the week of {}",
                to_iso(date),
                to_iso(self.week.monday())
            )));
        }
        let text = text.into();
        if text.trim().is_empty() {
            self.drafts.remove(&date);
        } else {
            self.drafts.insert(date, text);
        }
        Ok(())
    }

    /// Drop the draft for `date`, e.g. once it has been scheduled.
    pub fn remove_draft(&mut self, date: NaiveDate) {
        self.drafts.remove(&date);
    }

    pub fn draft(&self, date: NaiveDate) -> Option<&str> {
        self.drafts.get(&date).map(String::as_str)
    }

    /// Drafts keyed by `YYYY-MM-DD`, in date order.
    pub fn drafts_by_iso(&self) -> BTreeMap<String, String> {
        self.drafts
            .iter()
            .map(|(date, text)| (to_iso(*date), text.clone()))
            .collect()
    }

    pub fn has_drafts(&self) -> bool {
        !self.drafts.is_empty()
    }

    /// Move to the previous week, discarding drafts.
    pub fn previous_week(&mut self) {
        self.week = self.week.previous();
        self.drafts.clear();
    }

    /// Move to the next week, discarding drafts.
    pub fn next_week(&mut self) {
        self.week = self.week.next();
        self.drafts.clear();
    }

    /// Discard drafts after a successful submit.
    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    /// One request per draft, in date order.
    pub fn pending(&self) -> Result<Vec<ScheduledMessage>, CoreError> {
        self.drafts
            .iter()
            .map(|(date, text)| {
                validate_body(text)?;
                Ok(ScheduledMessage {
                    camper_id: Some(self.camper_id),
                    bunk: None,
                    send_on: *date,
                    body: text.trim().to_string(),
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Bunk grouping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BunkGroup {
    pub bunk: String,
    pub messages: Vec<DailyMessage>,
}

/// Cluster messages by bunk, bunks sorted by name with
/// [`UNASSIGNED_BUNK`] last. Input order is kept within each group.
pub fn group_by_bunk(messages: Vec<DailyMessage>) -> Vec<BunkGroup> {
    let mut named: BTreeMap<String, Vec<DailyMessage>> = BTreeMap::new();
    let mut unassigned = Vec::new();

    for message in messages {
        match message.bunk.as_deref().map(str::trim) {
            Some(bunk) if !bunk.is_empty() => {
                named.entry(bunk.to_string()).or_default().push(message);
            }
            _ => unassigned.push(message),
        }
    }

    let mut groups: Vec<BunkGroup> = named
        .into_iter()
        .map(|(bunk, messages)| BunkGroup { bunk, messages })
        .collect();
    if !unassigned.is_empty() {
        groups.push(BunkGroup {
            bunk: UNASSIGNED_BUNK.to_string(),
            messages: unassigned,
        });
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
