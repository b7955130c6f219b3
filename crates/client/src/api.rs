//! The remote camp API boundary.
//!
//! Every page-level flow talks to the backend through [`CampApi`]. The
//! production implementation is [`HttpCampApi`](crate::http::HttpCampApi);
//! tests plug in an in-memory fake.

use async_trait::async_trait;

use camp_core::attendance::{AttendanceRecord, BulkAttendanceRequest};
use camp_core::camper::Camper;
use camp_core::events::{Carpool, Event};
use camp_core::filters::ListFilter;
use camp_core::leaderboard::LeaderboardEntry;
use camp_core::messages::{DailyMessage, ScheduledMessage};
use camp_core::photos::Photo;
use camp_core::retention::TrashedRecord;
use camp_core::types::DbId;

use crate::error::ClientResult;

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[async_trait]
pub trait CampApi: Send + Sync {
    async fn list_campers(&self, filter: &ListFilter) -> ClientResult<Vec<Camper>>;

    async fn list_attendance(&self, filter: &ListFilter) -> ClientResult<Vec<AttendanceRecord>>;

    /// Save a whole roster for one activity and date in a single request.
    async fn save_attendance(&self, request: &BulkAttendanceRequest) -> ClientResult<()>;

    /// Point totals, summed server-side.
    async fn leaderboard(&self) -> ClientResult<Vec<LeaderboardEntry>>;

    async fn list_events(&self, filter: &ListFilter) -> ClientResult<Vec<Event>>;

    async fn list_carpools(&self, filter: &ListFilter) -> ClientResult<Vec<Carpool>>;

    async fn list_trash(&self) -> ClientResult<Vec<TrashedRecord>>;

    async fn restore_trash(&self, id: DbId) -> ClientResult<()>;

    async fn list_photos(&self, filter: &ListFilter) -> ClientResult<Vec<Photo>>;

    async fn upload_photo(&self, file: &UploadFile) -> ClientResult<Photo>;

    /// Queue face recognition again for one photo.
    async fn reprocess_photo(&self, id: DbId) -> ClientResult<()>;

    async fn list_messages(&self, filter: &ListFilter) -> ClientResult<Vec<DailyMessage>>;

    async fn schedule_message(&self, message: &ScheduledMessage) -> ClientResult<()>;
}
