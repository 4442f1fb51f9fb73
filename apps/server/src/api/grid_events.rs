//! Grid event endpoint: folds widget events into the URL query state.

use actix_web::{HttpResponse, post, web};
use tracing::debug;

use crate::binder::{ViewEvent, ViewState, reduce};
use crate::error::{AppError, AppResult};
use crate::models::{GridEventRequest, GridEventResponse, QueryState};

use super::ViewSettings;

/// Apply one grid event to the current query.
///
/// Returns the next query and whether the list has to be refetched.
/// The query string is what the page writes back into its location.
#[utoipa::path(
    post,
    path = "/api/v1/grid/events",
    tag = "Grid",
    request_body = GridEventRequest,
    responses(
        (status = 200, description = "Next query state", body = GridEventResponse),
        (status = 400, description = "Malformed event", body = crate::error::ErrorResponse)
    )
)]
#[post("/grid/events")]
pub async fn apply_grid_event(
    settings: web::Data<ViewSettings>,
    body: web::Json<GridEventRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    let current = QueryState::from_params(&request.query, settings.default_page_size);
    let next = reduce(&current, &request.event);
    let refetch = next != current;

    let view_state = if refetch {
        ViewState::Idle.next(ViewEvent::QueryChanged)
    } else {
        ViewState::Idle
    };

    debug!(
        event = ?request.event,
        refetch,
        page = next.page,
        page_size = next.page_size,
        "Applied grid event"
    );

    Ok(HttpResponse::Ok().json(GridEventResponse {
        query_string: next.to_query_string(),
        query: next,
        refetch,
        view_state,
    }))
}

/// Configure grid event routes.
///
/// Malformed bodies are reported through [`AppError`] so they share the
/// JSON error shape of every other endpoint.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .service(apply_grid_event);
}
