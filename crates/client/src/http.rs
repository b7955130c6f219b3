//! REST implementation of [`CampApi`] using [`reqwest`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;

use camp_core::attendance::{AttendanceRecord, BulkAttendanceRequest};
use camp_core::camper::Camper;
use camp_core::events::{Carpool, Event};
use camp_core::filters::ListFilter;
use camp_core::leaderboard::LeaderboardEntry;
use camp_core::messages::{DailyMessage, ScheduledMessage};
use camp_core::photos::Photo;
use camp_core::retention::TrashedRecord;
use camp_core::types::DbId;

use crate::api::{CampApi, UploadFile};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for one camp API deployment.
pub struct HttpCampApi {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpCampApi {
    /// Build a client with the configured timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.api_token.clone(),
        ))
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, api_url: String, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    // ---- private helpers ----

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&ListFilter>,
    ) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(filter) = filter {
            filter.validate()?;
            request = request.query(&filter.to_query_pairs());
        }
        tracing::debug!(path, "GET");
        let response = self.authorize(request).send().await?;
        Self::parse_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        tracing::debug!(path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::check_status(response).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "POST");
        let response = self.authorize(self.client.post(self.url(path))).send().await?;
        Self::check_status(response).await
    }

    /// Return the response unchanged on 2xx, otherwise an
    /// [`ClientError::Api`] with the status and body text.
    async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CampApi for HttpCampApi {
    async fn list_campers(&self, filter: &ListFilter) -> ClientResult<Vec<Camper>> {
        self.get_json("campers", Some(filter)).await
    }

    async fn list_attendance(&self, filter: &ListFilter) -> ClientResult<Vec<AttendanceRecord>> {
        self.get_json("attendance", Some(filter)).await
    }

    async fn save_attendance(&self, request: &BulkAttendanceRequest) -> ClientResult<()> {
        self.post_json("attendance/bulk", request).await
    }

    async fn leaderboard(&self) -> ClientResult<Vec<LeaderboardEntry>> {
        self.get_json("awards/leaderboard", None).await
    }

    async fn list_events(&self, filter: &ListFilter) -> ClientResult<Vec<Event>> {
        self.get_json("events", Some(filter)).await
    }

    async fn list_carpools(&self, filter: &ListFilter) -> ClientResult<Vec<Carpool>> {
        self.get_json("carpools", Some(filter)).await
    }

    async fn list_trash(&self) -> ClientResult<Vec<TrashedRecord>> {
        self.get_json("trash", None).await
    }

    async fn restore_trash(&self, id: DbId) -> ClientResult<()> {
        self.post_empty(&format!("trash/{id}/restore")).await
    }

    async fn list_photos(&self, filter: &ListFilter) -> ClientResult<Vec<Photo>> {
        self.get_json("photos", Some(filter)).await
    }

    async fn upload_photo(&self, file: &UploadFile) -> ClientResult<Photo> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        tracing::debug!(file_name = %file.file_name, bytes = file.bytes.len(), "Uploading photo");
        let response = self
            .authorize(self.client.post(self.url("photos")).multipart(form))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn reprocess_photo(&self, id: DbId) -> ClientResult<()> {
        self.post_empty(&format!("photos/{id}/reprocess")).await
    }

    async fn list_messages(&self, filter: &ListFilter) -> ClientResult<Vec<DailyMessage>> {
        self.get_json("messages", Some(filter)).await
    }

    async fn schedule_message(&self, message: &ScheduledMessage) -> ClientResult<()> {
        self.post_json("messages", message).await
    }
}
