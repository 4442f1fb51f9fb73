//! Grid view DTOs handed to the browser grid widget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::query::FilterModel;
use crate::binder::{PagingMode, ViewState};

/// Raw value of one cell, before formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value. Serializes as `null`.
    Absent,
    Int(i64),
    Text(String),
    Links(LinkTargets),
}

impl CellValue {
    /// Build a text value, treating `None` as absent.
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |v| Self::Text(v.to_string()))
    }

    /// Build an integer value, treating `None` as absent.
    pub fn int(value: Option<i64>) -> Self {
        value.map_or(Self::Absent, Self::Int)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Targets for the icon links of a job row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkTargets {
    /// Directory holding the job's logs.
    pub log: Option<String>,
    /// External error-tracker event.
    pub sentry: Option<String>,
}

/// How a column's value is interpreted and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    Duration,
    Links,
    Status,
    Link,
}

/// Column header description sent to the widget.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColumnSpec {
    pub field: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    pub kind: ColumnKind,
}

/// One rendered cell.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Cell {
    /// Raw value used for sorting and filtering.
    #[schema(value_type = Object)]
    pub value: CellValue,
    /// Display string.
    pub display: String,
    /// Style class for conditional formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// One rendered row, keyed by column field.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DisplayRow {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[schema(value_type = Object)]
    pub cells: BTreeMap<&'static str, Cell>,
}

/// Row density of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
}

/// Where filtering happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Client,
}

/// Fixed presentation options of the display surface.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DisplayOptions {
    pub density: Density,
    /// Container height in pixels.
    pub height: u32,
    /// CSS width of the container.
    pub width: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SortItem {
    pub field: &'static str,
    pub sort: SortDirection,
}

/// Paging state forwarded to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationState {
    #[schema(value_type = String)]
    pub mode: PagingMode,
    pub page: u32,
    pub page_size: u32,
    /// Reported total; a sentinel when the real total is unknown.
    pub row_count: u64,
    /// Hide the footer total when `row_count` is only a sentinel upper bound.
    pub hide_footer_row_count: bool,
}

/// Complete description of one grid as rendered by the display surface.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GridView {
    pub options: DisplayOptions,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<DisplayRow>,
    /// True while a fetch (initial or background refresh) is outstanding.
    pub loading: bool,
    #[schema(value_type = String)]
    pub view_state: ViewState,
    pub pagination: PaginationState,
    pub filter_mode: FilterMode,
    pub filter_model: FilterModel,
    pub sort_model: Vec<SortItem>,
}
