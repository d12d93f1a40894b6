//! View model state and its reducer.
//!
//! [`ViewState`] only changes through [`ViewState::apply`], one [`Action`]
//! at a time.

use crate::config;
use crate::form::{DraftEdit, FormDraft};
use crate::models::{LogRecord, StatsSnapshot};

/// Reconciliation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    AddForm,
}

/// Everything a state transition can do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RefreshStarted,
    RefreshSucceeded {
        stats: StatsSnapshot,
        logs: Vec<LogRecord>,
    },
    RefreshFailed(String),
    /// An in-flight refresh was dropped; restore what was there before.
    RefreshCancelled {
        phase: Phase,
        error: Option<String>,
    },
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    /// An in-flight submit was dropped; the draft is kept.
    SubmitCancelled,
    /// Raise a blocking notification.
    Notify(String),
    DismissNotice,
    ShowView(ActiveView),
    EditDraft(DraftEdit),
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub phase: Phase,
    pub stats: StatsSnapshot,
    /// Full collection in server order, most recent first.
    pub logs: Vec<LogRecord>,
    /// Banner shown after a failed refresh.
    pub error: Option<String>,
    /// Pending blocking notification from a failed create or delete.
    pub notice: Option<String>,
    pub draft: FormDraft,
    pub submitting: bool,
    pub view: ActiveView,
}

impl ViewState {
    pub fn new(draft: FormDraft) -> Self {
        Self {
            phase: Phase::Idle,
            stats: StatsSnapshot::placeholder(),
            logs: Vec::new(),
            error: None,
            notice: None,
            draft,
            submitting: false,
            view: ActiveView::Dashboard,
        }
    }

    /// Move to the state that follows `action`.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::RefreshStarted => {
                self.phase = Phase::Loading;
                self.error = None;
            }
            Action::RefreshSucceeded { stats, logs } => {
                self.phase = Phase::Ready;
                self.stats = stats;
                self.logs = logs;
            }
            Action::RefreshFailed(message) => {
                // Stats and logs stay as they were.
                self.phase = Phase::Error;
                self.error = Some(message);
            }
            Action::RefreshCancelled { phase, error } => {
                self.phase = phase;
                self.error = error;
            }
            Action::SubmitStarted => self.submitting = true,
            Action::SubmitSucceeded => {
                self.submitting = false;
                self.draft.apply(DraftEdit::ClearLiters);
                self.view = ActiveView::Dashboard;
            }
            Action::SubmitFailed(message) => {
                self.submitting = false;
                self.notice = Some(message);
            }
            Action::SubmitCancelled => self.submitting = false,
            Action::Notify(message) => self.notice = Some(message),
            Action::DismissNotice => self.notice = None,
            Action::ShowView(view) => self.view = view,
            Action::EditDraft(edit) => self.draft.apply(edit),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The slice of logs the dashboard lists.
    pub fn recent_logs(&self) -> &[LogRecord] {
        let end = self.logs.len().min(config::HISTORY_LIMIT);
        &self.logs[..end]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(FormDraft::default())
    }
}
