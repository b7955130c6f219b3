//! Status enums and their display tones.
//!
//! Every status string the API returns maps to an exhaustive enum with a
//! total `label()` / `tone()` function. Unknown keys are rejected by
//! `FromStr`; [`tone_for_key`] is the explicit fallback for display paths
//! that must render something.
//!
//! Statuses embedded in listed records deserialize unrecognised keys to an
//! `Unknown` variant (neutral tone) so one new server value does not fail
//! the whole list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceStatus;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Semantic colour family used by badges and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

// ---------------------------------------------------------------------------
// Event status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::Unknown => "Unknown",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Draft | Self::Unknown => Tone::Neutral,
            Self::Published => Tone::Success,
            Self::Cancelled => Tone::Danger,
            Self::Completed => Tone::Info,
        }
    }

    /// Whether campers can still sign up.
    pub fn accepts_signups(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for EventStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(unknown_key("event status", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Photo processing status
// ---------------------------------------------------------------------------

/// Face-recognition processing state of an uploaded photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PhotoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Processed",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Pending | Self::Unknown => Tone::Neutral,
            Self::Processing => Tone::Info,
            Self::Completed => Tone::Success,
            Self::Failed => Tone::Danger,
        }
    }

    /// Photos that bulk reprocessing should pick up.
    pub fn needs_reprocessing(self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl FromStr for PhotoStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(unknown_key("photo status", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Store provider
// ---------------------------------------------------------------------------

/// E-commerce backend a camp store is synced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreProvider {
    Shopify,
    Square,
    Woocommerce,
    Manual,
}

impl StoreProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shopify => "shopify",
            Self::Square => "square",
            Self::Woocommerce => "woocommerce",
            Self::Manual => "manual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Shopify => "Shopify",
            Self::Square => "Square",
            Self::Woocommerce => "WooCommerce",
            Self::Manual => "Manual entry",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Manual => Tone::Neutral,
            Self::Shopify | Self::Square | Self::Woocommerce => Tone::Info,
        }
    }

    pub fn is_synced(self) -> bool {
        !matches!(self, Self::Manual)
    }
}

impl FromStr for StoreProvider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopify" => Ok(Self::Shopify),
            "square" => Ok(Self::Square),
            "woocommerce" => Ok(Self::Woocommerce),
            "manual" => Ok(Self::Manual),
            other => Err(unknown_key("store provider", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Key lookup
// ---------------------------------------------------------------------------

/// Which status vocabulary a raw key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Attendance,
    Event,
    Photo,
    StoreProvider,
}

/// Tone for a raw status key. Unrecognised keys fall back to
/// [`Tone::Neutral`].
pub fn tone_for_key(kind: StatusKind, key: &str) -> Tone {
    let tone = match kind {
        StatusKind::Attendance => key.parse::<AttendanceStatus>().map(AttendanceStatus::tone),
        StatusKind::Event => key.parse::<EventStatus>().map(EventStatus::tone),
        StatusKind::Photo => key.parse::<PhotoStatus>().map(PhotoStatus::tone),
        StatusKind::StoreProvider => key.parse::<StoreProvider>().map(StoreProvider::tone),
    };
    tone.unwrap_or(Tone::Neutral)
}

pub(crate) fn unknown_key(kind: &str, key: &str) -> CoreError {
    CoreError::Validation(format!("Unknown {kind}: '{key}'"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
