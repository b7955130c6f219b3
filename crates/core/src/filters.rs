//! Filter objects for list endpoints.
//!
//! Every field is optional and an omitted field means "no filter". Nothing
//! is defaulted on the caller's behalf.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::to_iso;
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn on(self, date: NaiveDate) -> Self {
        self.between(date, date)
    }

    /// Reject an inverted date range.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(CoreError::Validation(format!(
                    "start_date {} is after end_date {}",
                    to_iso(start),
                    to_iso(end)
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Query-string pairs for the set fields only. Blank strings count as
    /// unset.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text_fields = [
            ("status", &self.status),
            ("category", &self.category),
            ("search", &self.search),
        ];
        for (key, value) in text_fields {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", to_iso(start)));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", to_iso(end)));
        }
        pairs
    }
}
