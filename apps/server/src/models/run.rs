//! Run models as served by Paddles.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::job::Job;
use super::lenient;

/// Per-outcome job counts of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RunResults {
    #[serde(default, deserialize_with = "lenient::i64_opt")]
    pub queued: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64_opt")]
    pub pass: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64_opt")]
    pub fail: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64_opt")]
    pub dead: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64_opt")]
    pub running: Option<i64>,
}

/// A test-suite execution.
///
/// Timestamps are kept exactly as the remote sent them; parsing happens when
/// a derived value or a display string is computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Run {
    /// Unique run name. Empty when the remote left it out.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub scheduled: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    /// When the run record was last posted (displayed as "updated").
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub machine_type: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    /// Free-form run status such as `finished pass`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub results: RunResults,
    /// Jobs of the run; only present when a single run is fetched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
}
