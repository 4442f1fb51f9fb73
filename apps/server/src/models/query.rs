//! URL query state and grid events.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::binder::ViewState;

/// Raw query parameters as they appear in the URL.
///
/// Values stay strings so that garbage input falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct QueryParams {
    /// Zero-based page index.
    #[serde(default, deserialize_with = "super::lenient::string_opt")]
    pub page: Option<String>,
    /// Rows per page.
    #[serde(default, rename = "pageSize", deserialize_with = "super::lenient::string_opt")]
    pub page_size: Option<String>,
    /// Status filter; absent means no filter.
    #[serde(default)]
    pub status: Option<String>,
}

/// Decoded paging and filtering state of one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Filter operators offered by the grid. Only `contains` is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterItem {
    pub field: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Option<String>,
}

/// Filter model exchanged with the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterModel {
    #[serde(default)]
    pub items: Vec<FilterItem>,
}

/// Event originated by the grid widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "snake_case")]
pub enum GridEvent {
    /// The user moved to another page.
    PageChange { page: u32 },
    /// The user picked another page size.
    PageSizeChange {
        #[serde(rename = "pageSize")]
        page_size: u32,
    },
    /// Combined page and page-size update.
    PaginationModelChange {
        page: u32,
        #[serde(rename = "pageSize")]
        page_size: u32,
    },
    /// The user edited or cleared the filter.
    FilterModelChange { model: FilterModel },
}

/// Body of `POST /grid/events`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GridEventRequest {
    /// Raw query parameters currently in the URL.
    #[serde(default)]
    pub query: QueryParams,
    pub event: GridEvent,
}

/// Result of applying a grid event.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GridEventResponse {
    pub query: QueryState,
    /// URL-encoded form of `query`, ready to replace the location's search part.
    pub query_string: String,
    /// True when the event changed the query and the view has to refetch.
    pub refetch: bool,
    #[schema(value_type = String)]
    pub view_state: ViewState,
}
