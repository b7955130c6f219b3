//! Shared test helpers: an in-memory [`CampApi`] with scripted failures.

#![allow(dead_code)]

pub mod stub;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use camp_client::api::{CampApi, UploadFile};
use camp_client::error::{ClientError, ClientResult};
use camp_core::attendance::{AttendanceRecord, BulkAttendanceRequest};
use camp_core::calendar::parse_iso_date;
use camp_core::camper::Camper;
use camp_core::events::{Carpool, Event};
use camp_core::filters::ListFilter;
use camp_core::leaderboard::LeaderboardEntry;
use camp_core::messages::{DailyMessage, ScheduledMessage};
use camp_core::photos::Photo;
use camp_core::retention::TrashedRecord;
use camp_core::status::PhotoStatus;
use camp_core::types::DbId;

pub fn date(s: &str) -> NaiveDate {
    parse_iso_date(s).expect("valid test date")
}

pub fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        body: "internal".into(),
    }
}

/// Data served by [`FakeApi`] plus scripted failures.
#[derive(Default)]
pub struct FakeState {
    pub campers: Vec<Camper>,
    pub attendance: Vec<AttendanceRecord>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub events: Vec<Event>,
    pub trash: Vec<TrashedRecord>,
    pub photos: Vec<Photo>,
    pub messages: Vec<DailyMessage>,
    pub carpools: Vec<Carpool>,

    pub fail_uploads: HashSet<String>,
    pub fail_reprocess: HashSet<DbId>,
    pub fail_schedule_on: HashSet<NaiveDate>,
    pub fail_leaderboard: bool,

    pub saved_attendance: Vec<BulkAttendanceRequest>,
    pub uploaded: Vec<String>,
    pub reprocessed: Vec<DbId>,
    pub scheduled: Vec<ScheduledMessage>,
    pub attendance_filters: Vec<ListFilter>,
}

#[derive(Default)]
pub struct FakeApi {
    pub state: Mutex<FakeState>,
    /// When set, `save_attendance` waits for a notification before answering.
    pub save_gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn new(state: FakeState) -> Self {
        Self {
            state: Mutex::new(state),
            save_gate: None,
        }
    }

    pub fn with_save_gate(mut self, gate: Arc<Notify>) -> Self {
        self.save_gate = Some(gate);
        self
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state lock")
    }
}

#[async_trait]
impl CampApi for FakeApi {
    async fn list_campers(&self, _filter: &ListFilter) -> ClientResult<Vec<Camper>> {
        Ok(self.state().campers.clone())
    }

    async fn list_attendance(&self, filter: &ListFilter) -> ClientResult<Vec<AttendanceRecord>> {
        let mut state = self.state();
        state.attendance_filters.push(filter.clone());
        Ok(state.attendance.clone())
    }

    async fn save_attendance(&self, request: &BulkAttendanceRequest) -> ClientResult<()> {
        if let Some(gate) = &self.save_gate {
            gate.notified().await;
        }
        self.state().saved_attendance.push(request.clone());
        Ok(())
    }

    async fn leaderboard(&self) -> ClientResult<Vec<LeaderboardEntry>> {
        let state = self.state();
        if state.fail_leaderboard {
            return Err(server_error());
        }
        Ok(state.leaderboard.clone())
    }

    async fn list_events(&self, _filter: &ListFilter) -> ClientResult<Vec<Event>> {
        Ok(self.state().events.clone())
    }

    async fn list_carpools(&self, _filter: &ListFilter) -> ClientResult<Vec<Carpool>> {
        Ok(self.state().carpools.clone())
    }

    async fn list_trash(&self) -> ClientResult<Vec<TrashedRecord>> {
        Ok(self.state().trash.clone())
    }

    async fn restore_trash(&self, id: DbId) -> ClientResult<()> {
        self.state().trash.retain(|t| t.id != id);
        Ok(())
    }

    async fn list_photos(&self, filter: &ListFilter) -> ClientResult<Vec<Photo>> {
        let photos = self.state().photos.clone();
        Ok(match filter.status.as_deref() {
            Some(status) => photos
                .into_iter()
                .filter(|p| p.processing_status.as_str() == status)
                .collect(),
            None => photos,
        })
    }

    async fn upload_photo(&self, file: &UploadFile) -> ClientResult<Photo> {
        let mut state = self.state();
        state.uploaded.push(file.file_name.clone());
        if state.fail_uploads.contains(&file.file_name) {
            return Err(server_error());
        }
        Ok(Photo {
            id: state.uploaded.len() as DbId,
            file_name: file.file_name.clone(),
            processing_status: PhotoStatus::Pending,
            face_count: 0,
        })
    }

    async fn reprocess_photo(&self, id: DbId) -> ClientResult<()> {
        let mut state = self.state();
        state.reprocessed.push(id);
        if state.fail_reprocess.contains(&id) {
            return Err(server_error());
        }
        Ok(())
    }

    async fn list_messages(&self, _filter: &ListFilter) -> ClientResult<Vec<DailyMessage>> {
        Ok(self.state().messages.clone())
    }

    async fn schedule_message(&self, message: &ScheduledMessage) -> ClientResult<()> {
        let mut state = self.state();
        if state.fail_schedule_on.contains(&message.send_on) {
            return Err(server_error());
        }
        state.scheduled.push(message.clone());
        Ok(())
    }
}
