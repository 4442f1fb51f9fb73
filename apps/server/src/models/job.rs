//! Job models as served by Paddles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use super::lenient;

/// Job outcome.
///
/// The remote service owns this enumeration, so unknown values are kept
/// verbatim in [`JobStatus::Other`] instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum JobStatus {
    Queued,
    Waiting,
    Running,
    Pass,
    Fail,
    Dead,
    #[default]
    Unknown,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Waiting => "waiting",
            Self::Running => "running",
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "queued" => Self::Queued,
            "waiting" => Self::Waiting,
            "running" => Self::Running,
            "pass" => Self::Pass,
            "fail" => Self::Fail,
            "dead" => Self::Dead,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Option<String>> for JobStatus {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Self::parse).unwrap_or_default()
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work within a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Job {
    /// Job ID, unique within its run. Paddles sends it as a string or a number.
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub job_id: Option<String>,
    /// Name of the run the job belongs to.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = String)]
    pub status: JobStatus,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    /// Server-reported duration in seconds.
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub machine_type: Option<String>,
    #[serde(default)]
    pub os_type: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    /// Node name to node metadata.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub targets: Option<BTreeMap<String, JsonValue>>,
    #[serde(default)]
    pub log_href: Option<String>,
    #[serde(default)]
    pub sentry_event: Option<String>,
}

/// Jobs that ran against one node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NodeJobs {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}
