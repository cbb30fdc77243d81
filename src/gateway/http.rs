//! HTTP backend using reqwest's blocking client.

use super::{
    Backend, LOGS_CLEAR_ENDPOINT, LOGS_ENDPOINT, LOGS_EXPORT_ENDPOINT, LOGS_IMPORT_ENDPOINT,
};
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::models::log_filter::LogFilter;
use crate::utils::time::format_backend_datetime;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("rtimeclock/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn export_url(&self, filter: &LogFilter) -> AppResult<Url> {
        Url::parse_with_params(&self.url(LOGS_EXPORT_ENDPOINT), export_query(filter))
            .map_err(|e| AppError::Config(format!("Invalid backend URL '{}': {e}", self.base_url)))
    }

    /// Non-2xx responses become `AppError::Backend`.
    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            Err(AppError::Backend {
                status: status.as_u16(),
                url: resp.url().to_string(),
            })
        }
    }
}

/// Query parameters for the export endpoint, bounds in the backend's local
/// `YYYY-MM-DD HH:MM:SS` format.
pub fn export_query(filter: &LogFilter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(from) = filter.from {
        params.push(("from", format_backend_datetime(from)));
    }
    if let Some(to) = filter.to {
        params.push(("to", format_backend_datetime(to)));
    }
    params
}

impl Backend for HttpBackend {
    fn fetch_logs(&self) -> AppResult<Vec<LogEntry>> {
        let resp = self.client.get(self.url(LOGS_ENDPOINT)).send()?;
        Ok(Self::check(resp)?.json::<Vec<LogEntry>>()?)
    }

    fn append_log(&self, entry: &LogEntry) -> AppResult<()> {
        let resp = self
            .client
            .post(self.url(LOGS_ENDPOINT))
            .json(entry)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn clear_logs(&self) -> AppResult<()> {
        let resp = self.client.post(self.url(LOGS_CLEAR_ENDPOINT)).send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn import_logs(&self, logs: &[LogEntry]) -> AppResult<()> {
        let resp = self
            .client
            .post(self.url(LOGS_IMPORT_ENDPOINT))
            .json(logs)
            .send()?;
        Self::check(resp)?;
        Ok(())
    }

    fn export_csv(&self, filter: &LogFilter) -> AppResult<String> {
        let resp = self.client.get(self.export_url(filter)?).send()?;
        Ok(Self::check(resp)?.text()?)
    }
}
