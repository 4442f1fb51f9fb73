//! Lifecycle of one list view: `idle -> loading -> success | error`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Inputs driving a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A fetch was issued.
    FetchStarted,
    FetchSucceeded,
    FetchFailed,
    /// Page, page size or filter changed; the view must refetch.
    QueryChanged,
}

impl ViewState {
    /// Next state after `event`. Events that make no sense in a state are ignored.
    pub fn next(self, event: ViewEvent) -> Self {
        match (self, event) {
            (_, ViewEvent::QueryChanged) => Self::Loading,
            (Self::Idle, ViewEvent::FetchStarted) => Self::Loading,
            (Self::Success | Self::Error, ViewEvent::FetchStarted) => Self::Loading,
            (Self::Loading, ViewEvent::FetchSucceeded) => Self::Success,
            (Self::Loading, ViewEvent::FetchFailed) => Self::Error,
            (state, _) => state,
        }
    }
}
