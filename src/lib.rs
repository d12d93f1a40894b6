//! FuelControl SDK for Rust.
//!
//! Client for a fuel-purchase tracking backend. The backend computes the
//! monthly statistics and stores purchase records; this crate fetches them,
//! keeps a local view model in step with the server after every change, and
//! manages the draft of a new purchase with its quick-pick suggestions.
//!
//! # Quick start
//!
//! ```no_run
//! use fuelcontrol_sdk::FuelControl;
//!
//! # async fn example() -> fuelcontrol_sdk::Result<()> {
//! let mut app = FuelControl::builder()
//!     .base_url("http://localhost:3000")
//!     .build()?;
//!
//! app.mount().await;
//! println!("{}", app.dashboard());
//!
//! app.controller_mut().pick_liters(40);
//! app.submit().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod gateway;
pub mod models;
pub mod store;
pub mod view;

pub use controller::{Confirm, Controller, DeleteOutcome, RefreshOutcome, SubmitOutcome};
pub use error::{FuelError, Result};
pub use form::{DraftEdit, DraftField, FormDraft, QuickPick};
pub use gateway::{Gateway, HttpGateway};
pub use models::{CreateLogRequest, FuelType, LogId, LogRecord, StatsSnapshot};
pub use store::{ActiveView, Phase, ViewState};
pub use view::{DashboardView, FormView};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FuelControlBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FuelControl`] client.
///
/// Use [`FuelControl::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FuelControlBuilder::build).
#[derive(Default)]
pub struct FuelControlBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl FuelControlBuilder {
    /// Set the backend base address.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a request timeout. By default requests wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. No request is sent until [`FuelControl::mount`].
    pub fn build(self) -> Result<FuelControl> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
        let gateway = HttpGateway::new(base_url, self.timeout)?;
        Ok(FuelControl {
            controller: Controller::new(gateway),
        })
    }
}

// ---------------------------------------------------------------------------
// FuelControl
// ---------------------------------------------------------------------------

/// The main entry point: a [`Controller`] wired to the HTTP backend.
pub struct FuelControl {
    controller: Controller<HttpGateway>,
}

impl FuelControl {
    /// Create a new builder for configuring the client.
    pub fn builder() -> FuelControlBuilder {
        FuelControlBuilder::default()
    }

    /// Load stats and logs for the first time.
    pub async fn mount(&mut self) -> RefreshOutcome {
        self.controller.mount().await
    }

    /// Refetch stats and logs.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        self.controller.refresh().await
    }

    /// Submit the current draft. See [`Controller::submit`].
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        self.controller.submit().await
    }

    /// Delete a record once `confirm` approves. See [`Controller::delete`].
    pub async fn delete<C>(&mut self, id: &LogId, confirm: &C) -> DeleteOutcome
    where
        C: Confirm + ?Sized,
    {
        self.controller.delete(id, confirm).await
    }

    /// Current view model.
    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// Render the dashboard from the current state.
    pub fn dashboard(&self) -> DashboardView {
        DashboardView::render(self.controller.state())
    }

    /// Render the add form from the current state.
    pub fn form(&self) -> FormView {
        FormView::render(self.controller.state())
    }

    /// The controller driving this client.
    pub fn controller(&self) -> &Controller<HttpGateway> {
        &self.controller
    }

    /// Mutable access for navigation and draft editing.
    pub fn controller_mut(&mut self) -> &mut Controller<HttpGateway> {
        &mut self.controller
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FuelControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.controller.state();
        write!(
            f,
            "FuelControl(base_url={}, phase={:?}, logs={})",
            self.controller.gateway().base_url(),
            state.phase,
            state.logs.len()
        )
    }
}
