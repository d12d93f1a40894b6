//! HTTP gateway to the FuelControl backend.
//!
//! Wraps the four backend calls behind the [`Gateway`] trait. A non-success
//! status becomes [`FuelError::Transport`], an unparsable body becomes
//! [`FuelError::Decode`]. Nothing is retried; every failure is reported on
//! stderr with the name of the operation and handed back to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config;
use crate::error::{FuelError, Result};
use crate::models::{CreateLogRequest, LogId, LogRecord, StatsSnapshot};

const FETCH_STATS: &str = "fetch_stats";
const FETCH_LOGS: &str = "fetch_logs";
const CREATE_LOG: &str = "create_log";
const DELETE_LOG: &str = "delete_log";

/// The backend operations the controller depends on.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /dashboard/stats`
    async fn fetch_stats(&self) -> Result<StatsSnapshot>;

    /// `GET /fuel-logs`. An empty or `null` body yields an empty list.
    async fn fetch_logs(&self) -> Result<Vec<LogRecord>>;

    /// `POST /fuel-logs`. Returns the created record when the backend echoes
    /// one back.
    async fn create_log(&self, request: &CreateLogRequest) -> Result<Option<LogRecord>>;

    /// `DELETE /fuel-logs/{id}`
    async fn delete_log(&self, id: &LogId) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// HttpGateway
// ---------------------------------------------------------------------------

/// [`Gateway`] implementation backed by a `reqwest` client.
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    /// Create a gateway for the given base address.
    ///
    /// `timeout` of `None` leaves the client without a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }

    /// The base address requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status and read the body as text.
    async fn read_body(operation: &'static str, resp: reqwest::Response) -> Result<String> {
        let status = resp.status();
        if !status.is_success() {
            return Err(FuelError::Transport {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }

    async fn stats(&self) -> Result<StatsSnapshot> {
        let resp = self.client.get(config::stats_url(&self.base_url)).send().await?;
        let body = Self::read_body(FETCH_STATS, resp).await?;
        decode(FETCH_STATS, &body)
    }

    async fn logs(&self) -> Result<Vec<LogRecord>> {
        let resp = self.client.get(config::logs_url(&self.base_url)).send().await?;
        let body = Self::read_body(FETCH_LOGS, resp).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let logs: Option<Vec<LogRecord>> = decode(FETCH_LOGS, &body)?;
        Ok(logs.unwrap_or_default())
    }

    async fn create(&self, request: &CreateLogRequest) -> Result<Option<LogRecord>> {
        let resp = self
            .client
            .post(config::logs_url(&self.base_url))
            .json(request)
            .send()
            .await?;
        let body = Self::read_body(CREATE_LOG, resp).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        // The body must be JSON, but its shape is not part of the contract.
        let value: serde_json::Value = decode(CREATE_LOG, &body)?;
        Ok(serde_json::from_value(value).ok())
    }

    async fn delete(&self, id: &LogId) -> Result<bool> {
        let url = config::log_url(&self.base_url, &id.to_string())?;
        let resp = self.client.delete(url).send().await?;
        Self::read_body(DELETE_LOG, resp).await?;
        Ok(true)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_stats(&self) -> Result<StatsSnapshot> {
        logged(FETCH_STATS, self.stats().await)
    }

    async fn fetch_logs(&self) -> Result<Vec<LogRecord>> {
        logged(FETCH_LOGS, self.logs().await)
    }

    async fn create_log(&self, request: &CreateLogRequest) -> Result<Option<LogRecord>> {
        logged(CREATE_LOG, self.create(request).await)
    }

    async fn delete_log(&self, id: &LogId) -> Result<bool> {
        logged(DELETE_LOG, self.delete(id).await)
    }
}

fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| FuelError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn logged<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        eprintln!("FuelControl API error in {}: {}", operation, e);
    }
    result
}
