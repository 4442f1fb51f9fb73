//! Paging regimes and the row count reported to the pager.

use serde::{Deserialize, Serialize};

/// Reported total for client paging before any rows have arrived.
pub const CLIENT_ROW_COUNT_SENTINEL: u64 = 999;

/// Upper bound reported for server paging, where the real total is unknown.
pub const SERVER_ROW_COUNT_SENTINEL: u64 = 9999;

/// Who paginates the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    /// Every row is fetched up front; the widget pages locally.
    Client,
    /// The remote source is queried once per page.
    Server,
}

/// Total row count reported to the pager.
///
/// Never zero, so pager controls stay usable while data is still loading.
pub fn row_count(mode: PagingMode, fetched: Option<usize>) -> u64 {
    match mode {
        PagingMode::Client => fetched
            .filter(|&n| n > 0)
            .map_or(CLIENT_ROW_COUNT_SENTINEL, |n| n as u64),
        PagingMode::Server => SERVER_ROW_COUNT_SENTINEL,
    }
}
