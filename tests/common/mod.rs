//! Shared test fixtures for the FuelControl SDK integration tests.
//!
//! Provides a scripted in-memory [`FakeGateway`] for controller tests and
//! [`spawn_backend`], which serves an `axum` router on a local port for
//! gateway tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use fuelcontrol_sdk::{
    CreateLogRequest, FuelError, FuelType, Gateway, LogId, LogRecord, Result, StatsSnapshot,
};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// The stats payload of the reference month.
pub fn sample_stats() -> StatsSnapshot {
    StatsSnapshot {
        total_spent: 220.0,
        total_liters: 40.0,
        avg_price: 5.5,
        projected_total: 440.0,
        period_label: "Maio".to_string(),
    }
}

pub fn sample_log(id: i64, liters: f64, price: f64, day: &str) -> LogRecord {
    LogRecord {
        id: LogId::Number(id),
        fuel_type: FuelType::Gasoline,
        liters,
        total: liters * price,
        price_per_liter: price,
        date: date(day),
    }
}

/// Seven logs, most recent first.
pub fn many_logs() -> Vec<LogRecord> {
    (1..=7)
        .rev()
        .map(|i| sample_log(i, 10.0 * i as f64, 5.5, &format!("2024-05-{:02}", i)))
        .collect()
}

// ---------------------------------------------------------------------------
// FakeGateway
// ---------------------------------------------------------------------------

/// Server-side state behind a [`FakeGateway`].
pub struct FakeBackend {
    pub stats: StatsSnapshot,
    pub logs: Vec<LogRecord>,
    pub fail_stats: bool,
    pub fail_logs: bool,
    pub fail_create: bool,
    pub fail_delete: bool,
    /// Never answer `fetch_stats` / `create_log` while set.
    pub hang_stats: bool,
    pub hang_create: bool,
    /// Hold `fetch_stats` until `fetch_logs` has been called.
    pub stats_waits_for_logs: bool,
    pub next_id: i64,
    /// Operation names in call order.
    pub calls: Vec<&'static str>,
    pub created: Vec<CreateLogRequest>,
}

pub struct FakeGateway {
    backend: Mutex<FakeBackend>,
    logs_requested: Notify,
}

impl FakeGateway {
    pub fn new(stats: StatsSnapshot, logs: Vec<LogRecord>) -> Self {
        Self {
            backend: Mutex::new(FakeBackend {
                stats,
                logs,
                fail_stats: false,
                fail_logs: false,
                fail_create: false,
                fail_delete: false,
                hang_stats: false,
                hang_create: false,
                stats_waits_for_logs: false,
                next_id: 100,
                calls: Vec::new(),
                created: Vec::new(),
            }),
            logs_requested: Notify::new(),
        }
    }

    /// Backend holding the reference stats and a single log.
    pub fn sample() -> Self {
        Self::new(sample_stats(), vec![sample_log(1, 40.0, 5.5, "2024-05-01")])
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut FakeBackend) -> R) -> R {
        f(&mut self.backend.lock().unwrap())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.with(|b| b.calls.clone())
    }

    pub fn count(&self, operation: &str) -> usize {
        self.with(|b| b.calls.iter().filter(|c| **c == operation).count())
    }
}

fn fault(operation: &'static str, status: u16) -> FuelError {
    FuelError::Transport { operation, status }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn fetch_stats(&self) -> Result<StatsSnapshot> {
        let (hang, wait) = self.with(|b| (b.hang_stats, b.stats_waits_for_logs));
        if hang {
            std::future::pending::<()>().await;
        }
        if wait {
            self.logs_requested.notified().await;
        }
        self.with(|b| {
            b.calls.push("fetch_stats");
            if b.fail_stats {
                return Err(fault("fetch_stats", 500));
            }
            Ok(b.stats.clone())
        })
    }

    async fn fetch_logs(&self) -> Result<Vec<LogRecord>> {
        self.logs_requested.notify_one();
        self.with(|b| {
            b.calls.push("fetch_logs");
            if b.fail_logs {
                return Err(fault("fetch_logs", 503));
            }
            Ok(b.logs.clone())
        })
    }

    async fn create_log(&self, request: &CreateLogRequest) -> Result<Option<LogRecord>> {
        if self.with(|b| b.hang_create) {
            std::future::pending::<()>().await;
        }
        self.with(|b| {
            b.calls.push("create_log");
            if b.fail_create {
                return Err(fault("create_log", 500));
            }
            b.created.push(request.clone());
            let record = LogRecord {
                id: LogId::Number(b.next_id),
                fuel_type: request.fuel_type,
                liters: request.liters,
                total: request.liters * request.price_per_liter,
                price_per_liter: request.price_per_liter,
                date: request.date,
            };
            b.next_id += 1;
            b.stats.total_spent += record.total;
            b.stats.total_liters += record.liters;
            b.logs.insert(0, record.clone());
            Ok(Some(record))
        })
    }

    async fn delete_log(&self, id: &LogId) -> Result<bool> {
        self.with(|b| {
            b.calls.push("delete_log");
            if b.fail_delete {
                return Err(fault("delete_log", 500));
            }
            let before = b.logs.len();
            b.logs.retain(|l| &l.id != id);
            if b.logs.len() == before {
                return Err(fault("delete_log", 404));
            }
            Ok(true)
        })
    }
}

// ---------------------------------------------------------------------------
// Local HTTP backend
// ---------------------------------------------------------------------------

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
