//! Status-based style classes and tooltip truncation.

use crate::models::CellValue;

/// Maximum tooltip length for a failure reason, ellipsis included.
pub const FAILURE_REASON_TOOLTIP_MAX: usize = 800;

const ELLIPSIS: &str = "...";

/// Class applied to a whole row. Unknown statuses yield a class no stylesheet matches.
pub fn row_class(status: &str) -> String {
    format!("status-{}", status)
}

/// Class applied to a status cell.
pub fn cell_class(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => format!("status-{}", s),
        CellValue::Int(n) => format!("status-{}", n),
        CellValue::Absent | CellValue::Links(_) => "status-".to_string(),
    }
}

/// Tooltip text for a failure reason.
///
/// Reasons longer than [`FAILURE_REASON_TOOLTIP_MAX`] characters are cut so
/// the result, ellipsis included, is exactly that long. The stored reason is
/// never modified.
pub fn failure_tooltip(reason: Option<&str>) -> String {
    let reason = reason.unwrap_or_default();
    if reason.chars().count() <= FAILURE_REASON_TOOLTIP_MAX {
        return reason.to_string();
    }

    let keep = FAILURE_REASON_TOOLTIP_MAX - ELLIPSIS.len();
    let mut truncated: String = reason.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
