//! HTTP client for the timetable lookup API.
//!
//! The server exposes two routes: `GET /` (health check, returns
//! `{"status": "ok"}`) and `GET /timetable/{batch}` (JSON array of rows,
//! 404 with a detail body when the batch is unknown). Batch matching is
//! case-insensitive on the server side, so the batch is sent verbatim.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::row::TimetableRow;

/// Result of a timetable fetch, split by kind so the presentation layer
/// can choose its own messaging per variant. Transport, decode and
/// timeout failures are reported through `AppError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Rows(Vec<TimetableRow>),
    NotFound,
    ServerError(u16),
}

#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let base_url = cfg.api_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::InvalidApiUrl(cfg.api_url.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout_secs: cfg.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the weekly timetable for a batch code.
    ///
    /// 404 and other non-2xx statuses are regular outcomes, not errors;
    /// the response body of failed statuses is ignored.
    pub fn fetch_timetable(&self, batch: &str) -> AppResult<FetchOutcome> {
        let url = format!("{}/timetable/{}", self.base_url, batch);
        let response = self.http.get(&url).send().map_err(|e| self.transport(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }
        if !response.status().is_success() {
            return Ok(FetchOutcome::ServerError(response.status().as_u16()));
        }

        let body = response.text().map_err(|e| self.transport(e))?;
        let rows: Vec<TimetableRow> = serde_json::from_str(&body)?;
        Ok(FetchOutcome::Rows(rows))
    }

    /// Hit the server's health route. Ok(true) means the server answered
    /// 2xx with `{"status": "ok"}`.
    pub fn health(&self) -> AppResult<bool> {
        let url = format!("{}/", self.base_url);
        let response = self.http.get(&url).send().map_err(|e| self.transport(e))?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body = response.text().map_err(|e| self.transport(e))?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(value.get("status").and_then(|s| s.as_str()) == Some("ok"))
    }

    fn transport(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout_secs)
        } else {
            AppError::Http(e)
        }
    }
}
