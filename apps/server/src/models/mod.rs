//! Domain models for the Pulpito dashboard.
//!
//! `run` and `job` mirror the payloads served by Paddles, `grid` describes the
//! grid views handed to the browser widget, and `query` holds the URL query
//! state and grid events consumed by the binder.

pub mod grid;
pub mod job;
pub mod query;
pub mod run;

// Re-export commonly used types
pub use grid::{
    Cell, CellValue, ColumnKind, ColumnSpec, Density, DisplayOptions, DisplayRow, FilterMode,
    GridView, LinkTargets, PaginationState, SortDirection, SortItem,
};
pub use job::{Job, JobStatus, NodeJobs};
pub use query::{
    FilterItem, FilterModel, FilterOperator, GridEvent, GridEventRequest, GridEventResponse,
    QueryParams, QueryState,
};
pub use run::{Run, RunResults};

/// Lenient deserializers for numeric fields sent by the remote service.
///
/// A value of the wrong JSON type becomes `None` instead of failing the whole
/// payload, so one malformed row never blanks an entire grid.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept any JSON number; everything else (including numeric strings) is `None`.
    pub fn f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Value::as_f64))
    }

    /// Accept integral JSON numbers, rounding floats.
    pub fn i64_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }))
    }

    /// Accept strings; numbers and booleans are stringified, everything else is `None`.
    pub fn string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }
}
