//! Derived values computed from already-fetched rows.
//!
//! Every function here is pure and recomputed on each render. A value that
//! cannot be computed is `None`, never zero and never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{Job, LinkTargets};

/// Naive layouts accepted in addition to RFC 3339. All are read as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a timestamp sent by the remote service.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole seconds between two timestamps, rounded half up.
///
/// `None` if either endpoint is missing or unparseable.
pub fn elapsed_secs(start: Option<&str>, end: Option<&str>) -> Option<i64> {
    let start = parse_timestamp(start?)?;
    let end = parse_timestamp(end?)?;
    let millis = (end - start).num_milliseconds();
    Some((millis + 500).div_euclid(1000))
}

/// Seconds between `started` and `updated`.
pub fn runtime(job: &Job) -> Option<i64> {
    elapsed_secs(job.started.as_deref(), job.updated.as_deref())
}

/// Time spent outside the server-reported duration: `runtime - duration`.
///
/// A zero duration means the job never reported one, so waiting is absent.
/// Halves round towards positive infinity, like [`elapsed_secs`].
pub fn waiting(job: &Job) -> Option<i64> {
    let runtime = runtime(job)?;
    let duration = job.duration.filter(|d| d.is_finite() && *d != 0.0)?;
    Some((runtime as f64 - duration + 0.5).floor() as i64)
}

/// Number of nodes the job targeted; `None` when there are none.
pub fn node_count(job: &Job) -> Option<i64> {
    job.targets
        .as_ref()
        .map(|targets| targets.len())
        .filter(|&n| n > 0)
        .map(|n| n as i64)
}

/// Strip the trailing path segment of a URL-like string, keeping the slash.
///
/// `http://qa/run/1/teuthology.log` becomes `http://qa/run/1/`.
pub fn dir_name(path: &str) -> Option<String> {
    let idx = path.rfind('/')?;
    Some(path[..=idx].to_string())
}

/// Targets of the log and error-tracker icons of a job row.
pub fn link_targets(job: &Job) -> LinkTargets {
    LinkTargets {
        log: job
            .log_href
            .as_deref()
            .filter(|href| !href.is_empty())
            .and_then(dir_name),
        sentry: job.sentry_event.clone().filter(|s| !s.is_empty()),
    }
}
