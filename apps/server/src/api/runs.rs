//! Run list and per-run job list handlers.

use actix_web::{HttpResponse, get, web};
use tracing::info;

use super::{ViewSettings, render_list};
use crate::binder::PagingMode;
use crate::grid::{job_columns, job_sort_model, run_columns, run_sort_model};
use crate::models::{QueryParams, QueryState};
use crate::services::{Fetched, PaddlesClient};

/// List runs, one page per request.
#[utoipa::path(
    get,
    path = "/api/v1/runs",
    tag = "Runs",
    params(QueryParams),
    responses(
        (status = 200, description = "Run grid; failed fetches yield an empty grid in the error state", body = crate::models::GridView)
    )
)]
#[get("/runs")]
pub async fn list_runs(
    client: web::Data<PaddlesClient>,
    settings: web::Data<ViewSettings>,
    params: web::Query<QueryParams>,
) -> HttpResponse {
    let query = QueryState::from_params(&params, settings.default_page_size);
    let fetched = client.runs(&query).await;

    let view = render_list(
        "runs",
        &run_columns(),
        &query,
        PagingMode::Server,
        run_sort_model(),
        fetched,
    );

    info!(
        page = query.page,
        page_size = query.page_size,
        status = ?query.status,
        rows = view.rows.len(),
        "Rendered run list"
    );

    HttpResponse::Ok().json(view)
}

/// List every job of a run; the widget pages them locally.
#[utoipa::path(
    get,
    path = "/api/v1/runs/{name}/jobs",
    tag = "Runs",
    params(
        ("name" = String, Path, description = "Run name"),
        QueryParams
    ),
    responses(
        (status = 200, description = "Job grid; failed fetches yield an empty grid in the error state", body = crate::models::GridView)
    )
)]
#[get("/runs/{name}/jobs")]
pub async fn list_run_jobs(
    client: web::Data<PaddlesClient>,
    settings: web::Data<ViewSettings>,
    path: web::Path<String>,
    params: web::Query<QueryParams>,
) -> HttpResponse {
    let name = path.into_inner();
    let query = QueryState::from_params(&params, settings.default_page_size);
    let fetched = client.run(&name).await.map(|run| Fetched {
        data: run.data.jobs,
        refreshing: run.refreshing,
    });

    let view = render_list(
        "run_jobs",
        &job_columns(),
        &query,
        PagingMode::Client,
        job_sort_model(),
        fetched,
    );

    info!(run = %name, rows = view.rows.len(), "Rendered run job list");

    HttpResponse::Ok().json(view)
}

/// Configure run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_runs).service(list_run_jobs);
}
