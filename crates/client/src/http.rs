//! # HTTP Timetable Client
//!
//! [`HttpTimetableClient`] talks to the ERP backend over JSON. Every call is a
//! single request; failures are returned to the caller and never retried here.

use std::time::Duration;

use async_trait::async_trait;
use campus_timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::{
        catalog::{Course, Subject, Teacher},
        slot::{CreateSlotRequest, SlotRecord},
    },
};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    config::{ClientConfig, Session},
    envelope::{error_message, ApiEnvelope},
    source::{TimetableSource, TimetableView},
};

pub struct HttpTimetableClient {
    http: reqwest::Client,
    config: ClientConfig,
}

fn transport(err: reqwest::Error) -> TimetableError {
    TimetableError::Transport(eyre::Report::new(err))
}

impl HttpTimetableClient {
    pub fn new(config: ClientConfig) -> TimetableResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(transport)?;

        Ok(Self { http, config })
    }

    pub fn session(&self) -> &Session {
        &self.config.session
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.session.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        self.authorized(self.http.get(url))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        self.authorized(self.http.post(url))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> TimetableResult<T> {
        let response = request.send().await.map_err(transport)?;
        decode(response).await
    }
}

/// Decodes a successful response through [`ApiEnvelope`] and maps any other
/// status to a [`TimetableError`].
async fn decode<T: DeserializeOwned>(response: Response) -> TimetableResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        return Err(TimetableError::from_status(
            status.as_u16(),
            error_message(&body),
        ));
    }

    serde_json::from_str::<ApiEnvelope<T>>(&body)
        .map(ApiEnvelope::into_inner)
        .map_err(|e| {
            TimetableError::Transport(eyre::Report::new(e).wrap_err("Unexpected response body"))
        })
}

#[async_trait]
impl TimetableSource for HttpTimetableClient {
    async fn fetch_slots(&self, view: TimetableView) -> TimetableResult<Vec<SlotRecord>> {
        let request = match &view {
            TimetableView::Student => self.get("timetable/student"),
            TimetableView::Teacher => self.get("timetable/teacher"),
            TimetableView::Course {
                course_id,
                semester,
            } => {
                let mut query = vec![("course_id", course_id.clone())];
                if let Some(semester) = semester {
                    query.push(("semester", semester.to_string()));
                }
                self.get("timetable").query(&query)
            }
        };

        let slots: Vec<SlotRecord> = self.send(request).await?;
        debug!(view = ?view, count = slots.len(), "Fetched timetable slots");
        Ok(slots)
    }

    async fn list_courses(&self) -> TimetableResult<Vec<Course>> {
        self.send(self.get("courses")).await
    }

    async fn list_subjects(&self, course_id: Option<String>) -> TimetableResult<Vec<Subject>> {
        let request = match course_id {
            Some(course_id) => self.get("subjects").query(&[("course_id", course_id)]),
            None => self.get("subjects"),
        };
        self.send(request).await
    }

    async fn list_teachers(&self) -> TimetableResult<Vec<Teacher>> {
        self.send(self.get("users/teachers")).await
    }

    async fn create_slot(&self, request: CreateSlotRequest) -> TimetableResult<SlotRecord> {
        let created: SlotRecord = self.send(self.post("timetable").json(&request)).await?;
        info!(
            day = %created.day,
            start = %created.start_time,
            subject_id = %request.subject_id,
            "Created timetable slot"
        );
        Ok(created)
    }
}
