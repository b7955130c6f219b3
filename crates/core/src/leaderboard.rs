//! Awards leaderboard ordering.
//!
//! Point totals are summed server-side. The client only assigns positional
//! ranks after a stable descending sort by `total_points`; ties keep the
//! order the entries arrived in. There is no secondary tie-break key.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Number of leaderboard positions shown on the podium.
pub const PODIUM_SIZE: usize = 3;

/// A camper's awards totals as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub camper_id: DbId,
    pub camper_name: String,
    pub total_points: i64,
    pub badge_count: i64,
}

/// A leaderboard entry with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// Stable descending sort by `total_points`, then `rank = index + 1`.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    // `sort_by` is stable; equal totals stay in input order.
    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

/// Ranked leaderboard split into podium and the rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    entries: Vec<RankedEntry>,
}

impl Leaderboard {
    /// Build from API data via [`rank_entries`]. Server order is kept for
    /// equal totals.
    pub fn from_server(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: rank_entries(entries),
        }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn podium(&self) -> &[RankedEntry] {
        &self.entries[..self.entries.len().min(PODIUM_SIZE)]
    }

    /// Ranks 4 and below.
    pub fn rest(&self) -> &[RankedEntry] {
        &self.entries[self.entries.len().min(PODIUM_SIZE)..]
    }

    pub fn rank_of(&self, camper_id: DbId) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.entry.camper_id == camper_id)
            .map(|e| e.rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
