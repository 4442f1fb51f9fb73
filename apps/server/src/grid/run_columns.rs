//! Columns of the run list.

use crate::models::{CellValue, ColumnKind, Run, SortDirection, SortItem};

use super::columns::{Column, GridRow};
use super::derive::elapsed_secs;

const DATE_WIDTH: u16 = 150;

impl GridRow for Run {
    fn row_id(&self) -> String {
        self.name.clone()
    }
}

/// Wall-clock time between the run starting and its last update.
pub fn run_runtime(run: &Run) -> Option<i64> {
    elapsed_secs(run.started.as_deref(), run.posted.as_deref())
}

/// Column set of the run list.
pub fn run_columns() -> Vec<Column<Run>> {
    vec![
        Column::field("user", ColumnKind::Text, |r: &Run| {
            CellValue::text(r.user.as_deref())
        }),
        Column::field("scheduled", ColumnKind::Date, |r: &Run| {
            CellValue::text(r.scheduled.as_deref())
        })
        .width(DATE_WIDTH),
        Column::field("started", ColumnKind::Date, |r: &Run| {
            CellValue::text(r.started.as_deref())
        })
        .width(DATE_WIDTH),
        Column::field("posted", ColumnKind::Date, |r: &Run| {
            CellValue::text(r.posted.as_deref())
        })
        .header("updated")
        .width(DATE_WIDTH),
        Column::derived("runtime", ColumnKind::Duration, |r: &Run| {
            CellValue::int(run_runtime(r))
        }),
        Column::field("suite", ColumnKind::Text, |r: &Run| {
            CellValue::text(r.suite.as_deref())
        }),
        Column::field("branch", ColumnKind::Text, |r: &Run| {
            CellValue::text(r.branch.as_deref())
        }),
        Column::field("machine_type", ColumnKind::Text, |r: &Run| {
            CellValue::text(r.machine_type.as_deref())
        }),
        Column::field("sha1", ColumnKind::Text, |r: &Run| {
            CellValue::text(r.sha1.as_deref())
        })
        .header("hash"),
        Column::derived("queued", ColumnKind::Number, |r: &Run| {
            CellValue::int(r.results.queued)
        }),
        Column::derived("pass", ColumnKind::Number, |r: &Run| {
            CellValue::int(r.results.pass)
        }),
        Column::derived("fail", ColumnKind::Number, |r: &Run| {
            CellValue::int(r.results.fail)
        }),
        Column::derived("dead", ColumnKind::Number, |r: &Run| {
            CellValue::int(r.results.dead)
        }),
        Column::derived("running", ColumnKind::Number, |r: &Run| {
            CellValue::int(r.results.running)
        }),
    ]
}

/// Newest runs first.
pub fn run_sort_model() -> Vec<SortItem> {
    vec![SortItem {
        field: "scheduled",
        sort: SortDirection::Desc,
    }]
}
