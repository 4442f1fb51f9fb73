//! Query-state binder: URL parameters, paging regimes and list-view lifecycle.

pub mod paging;
pub mod query_state;
pub mod view_state;

pub use paging::{CLIENT_ROW_COUNT_SENTINEL, PagingMode, SERVER_ROW_COUNT_SENTINEL, row_count};
pub use query_state::{MAX_PAGE_SIZE, STATUS_FIELD, filter_model, reduce};
pub use view_state::{ViewEvent, ViewState};
