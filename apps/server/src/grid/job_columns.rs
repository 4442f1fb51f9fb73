//! Columns of the job lists.

use crate::models::{CellValue, ColumnKind, Job, SortDirection, SortItem};

use super::columns::{Column, GridRow};
use super::derive::{link_targets, node_count, runtime, waiting};
use super::style::{cell_class, failure_tooltip, row_class};

const DATE_WIDTH: u16 = 125;
const NARROW_WIDTH: u16 = 85;

impl GridRow for Job {
    fn row_id(&self) -> String {
        self.job_id.clone().unwrap_or_default()
    }

    fn row_class(&self) -> Option<String> {
        Some(row_class(self.status.as_str()))
    }
}

/// Page of a single job.
fn job_href(job: &Job, value: &CellValue) -> Option<String> {
    let run = job.name.as_deref()?;
    let job_id = value.as_str()?;
    Some(format!(
        "/runs/{}/jobs/{}",
        urlencoding::encode(run),
        urlencoding::encode(job_id)
    ))
}

/// Column set shared by the run and node job lists.
pub fn job_columns() -> Vec<Column<Job>> {
    vec![
        Column::field("status", ColumnKind::Status, |j: &Job| {
            CellValue::Text(j.status.to_string())
        })
        .width(NARROW_WIDTH)
        .cell_class(cell_class)
        .tooltip(|j| Some(failure_tooltip(j.failure_reason.as_deref())).filter(|t| !t.is_empty())),
        Column::derived("links", ColumnKind::Links, |j: &Job| {
            CellValue::Links(link_targets(j))
        })
        .width(75),
        Column::field("job_id", ColumnKind::Link, |j: &Job| {
            CellValue::text(j.job_id.as_deref())
        })
        .header("job ID")
        .href(job_href),
        Column::field("posted", ColumnKind::Date, |j: &Job| {
            CellValue::text(j.posted.as_deref())
        })
        .width(DATE_WIDTH),
        Column::field("started", ColumnKind::Date, |j: &Job| {
            CellValue::text(j.started.as_deref())
        })
        .width(DATE_WIDTH),
        Column::field("updated", ColumnKind::Date, |j: &Job| {
            CellValue::text(j.updated.as_deref())
        })
        .width(DATE_WIDTH),
        Column::derived("runtime", ColumnKind::Duration, |j: &Job| {
            CellValue::int(runtime(j))
        }),
        Column::field("duration", ColumnKind::Duration, |j: &Job| {
            CellValue::int(j.duration.filter(|d| d.is_finite()).map(|d| d.round() as i64))
        }),
        Column::derived("waiting", ColumnKind::Duration, |j: &Job| {
            CellValue::int(waiting(j))
        })
        .header("in waiting"),
        Column::field("machine_type", ColumnKind::Text, |j: &Job| {
            CellValue::text(j.machine_type.as_deref())
        })
        .header("machine type"),
        Column::field("os_type", ColumnKind::Text, |j: &Job| {
            CellValue::text(j.os_type.as_deref())
        })
        .header("OS type")
        .width(NARROW_WIDTH),
        Column::field("os_version", ColumnKind::Text, |j: &Job| {
            CellValue::text(j.os_version.as_deref())
        })
        .header("OS version")
        .width(NARROW_WIDTH),
        Column::derived("nodes", ColumnKind::Number, |j: &Job| {
            CellValue::int(node_count(j))
        })
        .header("nodes")
        .width(NARROW_WIDTH),
    ]
}

/// Jobs in ID order.
pub fn job_sort_model() -> Vec<SortItem> {
    vec![SortItem {
        field: "job_id",
        sort: SortDirection::Asc,
    }]
}
