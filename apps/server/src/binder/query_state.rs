//! Two-way binding between URL query parameters and grid paging/filter state.
//!
//! The query string is the only authoritative store: inbound parsing turns it
//! into a [`QueryState`], and [`reduce`] folds grid events into the next state
//! to be written back.

use crate::models::{FilterItem, FilterModel, FilterOperator, GridEvent, QueryParams, QueryState};

/// Upper bound accepted for `pageSize`.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// The only filterable field.
pub const STATUS_FIELD: &str = "status";

impl QueryState {
    /// Decode raw query parameters, falling back to defaults on bad input.
    pub fn from_params(params: &QueryParams, default_page_size: u32) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(0);

        let page_size = params
            .page_size
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(default_page_size)
            .clamp(1, MAX_PAGE_SIZE);

        Self {
            page,
            page_size,
            status: normalize_status(params.status.as_deref()),
        }
    }

    /// Encode as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&pageSize={}", self.page, self.page_size);
        if let Some(ref status) = self.status {
            query.push_str("&status=");
            query.push_str(&urlencoding::encode(status));
        }
        query
    }
}

fn normalize_status(status: Option<&str>) -> Option<String> {
    status
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Apply one grid event to the current state.
pub fn reduce(state: &QueryState, event: &GridEvent) -> QueryState {
    match event {
        GridEvent::PageChange { page } => QueryState {
            page: *page,
            ..state.clone()
        },
        GridEvent::PageSizeChange { page_size } => QueryState {
            page_size: (*page_size).clamp(1, MAX_PAGE_SIZE),
            ..state.clone()
        },
        GridEvent::PaginationModelChange { page, page_size } => QueryState {
            page: *page,
            page_size: (*page_size).clamp(1, MAX_PAGE_SIZE),
            ..state.clone()
        },
        GridEvent::FilterModelChange { model } => QueryState {
            status: normalize_status(model.items.first().and_then(|item| item.value.as_deref())),
            ..state.clone()
        },
    }
}

/// Filter model the widget should show for `state`.
pub fn filter_model(state: &QueryState) -> FilterModel {
    let items = state
        .status
        .as_ref()
        .map(|status| FilterItem {
            field: STATUS_FIELD.to_string(),
            operator: FilterOperator::Contains,
            value: Some(status.clone()),
        })
        .into_iter()
        .collect();

    FilterModel { items }
}
