//! API endpoint modules.

use tracing::warn;

use crate::binder::{PagingMode, ViewEvent, ViewState};
use crate::error::FetchError;
use crate::grid::{Column, GridRow, GridSurface};
use crate::models::{GridView, QueryState, SortItem};
use crate::services::Fetched;

pub mod grid_events;
pub mod health;
pub mod nodes;
pub mod openapi;
pub mod runs;

pub use grid_events::configure_routes as configure_grid_event_routes;
pub use health::configure_health_routes;
pub use nodes::configure_routes as configure_node_routes;
pub use openapi::ApiDoc;
pub use runs::configure_routes as configure_run_routes;

/// Settings shared by the list views.
#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    /// Page size used when the URL carries none.
    pub default_page_size: u32,
}

/// Drive one list view through its lifecycle and render the result.
///
/// A failed fetch renders an empty grid in the `error` state instead of an
/// HTTP error, so one broken list never takes the page down.
pub(crate) fn render_list<R: GridRow>(
    view: &str,
    columns: &[Column<R>],
    query: &QueryState,
    mode: PagingMode,
    sort_model: Vec<SortItem>,
    fetched: Result<Fetched<Vec<R>>, FetchError>,
) -> GridView {
    let state = ViewState::Idle.next(ViewEvent::FetchStarted);
    let surface = GridSurface::new(columns, query, mode).sort_model(sort_model);

    match fetched {
        Ok(fetched) => surface.render(
            state.next(ViewEvent::FetchSucceeded),
            Some(fetched.data.as_slice()),
            fetched.refreshing,
        ),
        Err(e) => {
            warn!(view = %view, error = %e, "List fetch failed, rendering empty grid");
            surface.render(state.next(ViewEvent::FetchFailed), None, false)
        }
    }
}
