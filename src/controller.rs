//! Reconciliation between the local [`ViewState`] and the backend.
//!
//! After mount and after every successful create or delete, stats and logs
//! are fetched together and swapped in only when both calls succeed. Local
//! state is never patched to anticipate a server change.

use crate::config;
use crate::error::{FuelError, Result};
use crate::form::{DraftEdit, DraftField};
use crate::gateway::Gateway;
use crate::models::{FuelType, LogId, LogRecord};
use crate::store::{Action, ActiveView, Phase, ViewState};

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Ready,
    Failed,
    /// A refresh was already in flight; nothing was fetched.
    Busy,
}

#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined; the gateway was not called.
    Cancelled,
    Deleted(RefreshOutcome),
    Failed(FuelError),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Saved {
        record: Option<LogRecord>,
        refresh: RefreshOutcome,
    },
    Failed(FuelError),
}

// ---------------------------------------------------------------------------
// InFlight
// ---------------------------------------------------------------------------

/// Holds the state while a backend call is pending.
///
/// If the owning future is dropped before [`finish`](Self::finish) runs,
/// the rollback action is applied so no in-flight flag is left behind.
struct InFlight<'a> {
    state: &'a mut ViewState,
    rollback: Option<Action>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut ViewState, start: Action, rollback: Action) -> Self {
        state.apply(start);
        Self {
            state,
            rollback: Some(rollback),
        }
    }

    fn finish(mut self, action: Action) {
        self.rollback = None;
        self.state.apply(action);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(action) = self.rollback.take() {
            self.state.apply(action);
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct Controller<G: Gateway> {
    gateway: G,
    state: ViewState,
}

impl<G: Gateway> Controller<G> {
    /// Create a controller with a fresh state dated today.
    pub fn new(gateway: G) -> Self {
        Self::with_state(gateway, ViewState::default())
    }

    pub fn with_state(gateway: G, state: ViewState) -> Self {
        Self { gateway, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    // -- Reconciliation ----------------------------------------------------

    /// Initial load.
    pub async fn mount(&mut self) -> RefreshOutcome {
        self.refresh().await
    }

    /// Fetch stats and logs concurrently and replace both, or neither.
    ///
    /// Dropping the returned future puts the phase and error banner back
    /// to what they were before the call.
    pub async fn refresh(&mut self) -> RefreshOutcome {
        if self.state.phase == Phase::Loading {
            return RefreshOutcome::Busy;
        }
        let rollback = Action::RefreshCancelled {
            phase: self.state.phase,
            error: self.state.error.clone(),
        };
        let in_flight = InFlight::start(&mut self.state, Action::RefreshStarted, rollback);

        // The gateway has already logged whichever call failed.
        let joined = tokio::try_join!(self.gateway.fetch_stats(), self.gateway.fetch_logs());
        match joined {
            Ok((stats, logs)) => {
                in_flight.finish(Action::RefreshSucceeded { stats, logs });
                RefreshOutcome::Ready
            }
            Err(_) => {
                in_flight.finish(Action::RefreshFailed(config::CONNECTIVITY_ERROR.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    // -- Mutations ---------------------------------------------------------

    /// Delete a record after the user confirms, then refetch everything.
    ///
    /// On failure the collection is left as is and a notice is raised.
    pub async fn delete<C>(&mut self, id: &LogId, confirm: &C) -> DeleteOutcome
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(config::DELETE_CONFIRM_PROMPT) {
            return DeleteOutcome::Cancelled;
        }
        let deleted = self.gateway.delete_log(id).await;
        match deleted {
            Ok(_) => DeleteOutcome::Deleted(self.refresh().await),
            Err(e) => {
                self.dispatch(Action::Notify(config::DELETE_FAILED_NOTICE.to_string()));
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Submit the current draft.
    ///
    /// Returns `Err` without touching the backend when a submission is
    /// already running or the liters field is not numeric. A gateway
    /// failure keeps the draft and raises a notice. Dropping the returned
    /// future while the create call is pending clears the submitting flag.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.state.submitting {
            return Err(FuelError::SubmissionInProgress);
        }
        let request = self.state.draft.to_request()?;
        let in_flight = InFlight::start(
            &mut self.state,
            Action::SubmitStarted,
            Action::SubmitCancelled,
        );

        let created = self.gateway.create_log(&request).await;
        match created {
            Ok(record) => {
                in_flight.finish(Action::SubmitSucceeded);
                let refresh = self.refresh().await;
                Ok(SubmitOutcome::Saved { record, refresh })
            }
            Err(e) => {
                in_flight.finish(Action::SubmitFailed(config::SAVE_FAILED_NOTICE.to_string()));
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(Action::DismissNotice);
    }

    // -- Navigation --------------------------------------------------------

    pub fn show_dashboard(&mut self) {
        self.dispatch(Action::ShowView(ActiveView::Dashboard));
    }

    pub fn show_add_form(&mut self) {
        self.dispatch(Action::ShowView(ActiveView::AddForm));
    }

    /// Switch between the dashboard and the form.
    pub fn toggle_view(&mut self) {
        let next = match self.state.view {
            ActiveView::Dashboard => ActiveView::AddForm,
            ActiveView::AddForm => ActiveView::Dashboard,
        };
        self.dispatch(Action::ShowView(next));
    }

    // -- Draft editing -----------------------------------------------------

    pub fn edit_draft(&mut self, edit: DraftEdit) {
        self.dispatch(Action::EditDraft(edit));
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.edit_draft(DraftEdit::SetField(field, value.into()));
    }

    pub fn select_fuel_type(&mut self, fuel_type: FuelType) {
        self.edit_draft(DraftEdit::SelectFuelType(fuel_type));
    }

    pub fn pick_liters(&mut self, amount: u32) {
        self.edit_draft(DraftEdit::PickLiters(amount));
    }

    pub fn pick_price(&mut self, price: impl Into<String>) {
        self.edit_draft(DraftEdit::PickPrice(price.into()));
    }
}
