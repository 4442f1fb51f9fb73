//! Per-node job list handler.

use actix_web::{HttpResponse, get, web};
use tracing::info;

use super::{ViewSettings, render_list};
use crate::binder::PagingMode;
use crate::grid::{job_columns, job_sort_model};
use crate::models::{QueryParams, QueryState};
use crate::services::{Fetched, PaddlesClient};

/// List the jobs that ran on a node, one page per request.
#[utoipa::path(
    get,
    path = "/api/v1/nodes/{name}/jobs",
    tag = "Nodes",
    params(
        ("name" = String, Path, description = "Node name"),
        QueryParams
    ),
    responses(
        (status = 200, description = "Job grid; failed fetches yield an empty grid in the error state", body = crate::models::GridView)
    )
)]
#[get("/nodes/{name}/jobs")]
pub async fn list_node_jobs(
    client: web::Data<PaddlesClient>,
    settings: web::Data<ViewSettings>,
    path: web::Path<String>,
    params: web::Query<QueryParams>,
) -> HttpResponse {
    let node = path.into_inner();
    let query = QueryState::from_params(&params, settings.default_page_size);
    let fetched = client.node_jobs(&node, &query).await.map(|node_jobs| Fetched {
        data: node_jobs.data.jobs,
        refreshing: node_jobs.refreshing,
    });

    let view = render_list(
        "node_jobs",
        &job_columns(),
        &query,
        PagingMode::Server,
        job_sort_model(),
        fetched,
    );

    info!(
        node = %node,
        page = query.page,
        rows = view.rows.len(),
        "Rendered node job list"
    );

    HttpResponse::Ok().json(view)
}

/// Configure node routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_node_jobs);
}
