//! Photo gallery records and face-tag processing state.

use serde::{Deserialize, Serialize};

use crate::status::PhotoStatus;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: DbId,
    pub file_name: String,
    pub processing_status: PhotoStatus,
    #[serde(default)]
    pub face_count: i64,
}

/// Ids of photos whose face processing failed, in input order.
pub fn reprocess_candidates(photos: &[Photo]) -> Vec<DbId> {
    photos
        .iter()
        .filter(|p| p.processing_status.needs_reprocessing())
        .map(|p| p.id)
        .collect()
}
