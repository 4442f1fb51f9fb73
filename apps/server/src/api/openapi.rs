//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pulpito Server",
        version = "0.1.0",
        description = "Grid views over Paddles test runs, run jobs and node jobs"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::health::ready,
        api::runs::list_runs,
        api::runs::list_run_jobs,
        api::nodes::list_node_jobs,
        api::grid_events::apply_grid_event,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Paddles records
            models::Run,
            models::RunResults,
            models::Job,
            models::NodeJobs,
            // Grid
            models::GridView,
            models::ColumnSpec,
            models::ColumnKind,
            models::Cell,
            models::DisplayRow,
            models::DisplayOptions,
            models::Density,
            models::FilterMode,
            models::LinkTargets,
            models::PaginationState,
            models::SortItem,
            models::SortDirection,
            // Query binding
            models::QueryParams,
            models::QueryState,
            models::FilterModel,
            models::FilterItem,
            models::FilterOperator,
            models::GridEvent,
            models::GridEventRequest,
            models::GridEventResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Runs", description = "Run list and per-run job lists"),
        (name = "Nodes", description = "Jobs by node"),
        (name = "Grid", description = "Grid event binding")
    )
)]
pub struct ApiDoc;
