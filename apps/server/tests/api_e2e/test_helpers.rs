//! Shared test helpers for API E2E tests.

use std::time::Duration;

use actix_web::{App, dev::ServiceResponse, test, web};
use pulpito_lib::api::{self, ViewSettings};
use pulpito_lib::services::{CacheSettings, PaddlesClient, QueryCache};
use serde_json::{Value, json};

use super::mock_paddles::{MockPaddles, MockPaddlesState};

/// Page size used when a request carries none.
pub const TEST_DEFAULT_PAGE_SIZE: u32 = 25;

/// A run as Paddles lists it.
pub fn sample_run(name: &str, status: &str) -> Value {
    json!({
        "name": name,
        "user": "teuthology",
        "scheduled": "2024-03-01 10:00:00",
        "started": "2024-03-01 10:05:00",
        "posted": "2024-03-01 11:05:30",
        "updated": "2024-03-01 11:05:30",
        "suite": "rados",
        "branch": "main",
        "machine_type": "smithi",
        "sha1": "0123456789abcdef",
        "status": status,
        "results": {"queued": 0, "pass": 10, "fail": 2, "dead": 1, "running": 0}
    })
}

/// A job as Paddles embeds it in a run or node listing.
pub fn sample_job(run_name: &str, job_id: u64, status: &str) -> Value {
    let failure_reason = (status == "fail").then_some("Command failed on smithi001");
    json!({
        "job_id": job_id,
        "name": run_name,
        "status": status,
        "failure_reason": failure_reason,
        "posted": "2024-03-01T10:00:00",
        "started": "2024-03-01T10:05:00",
        "updated": "2024-03-01T10:06:05",
        "duration": 40,
        "machine_type": "smithi",
        "os_type": "ubuntu",
        "os_version": "22.04",
        "targets": {"smithi001.front": {}, "smithi002.front": {}},
        "log_href": format!("http://qa-proxy/{}/{}/teuthology.log", run_name, job_id),
        "sentry_event": null
    })
}

/// Mock state with two runs, one of which has jobs, and one busy node.
pub fn seeded_state() -> MockPaddlesState {
    let run_name = "teuthology-2024-03-01-rados-main-smithi";
    let mut state = MockPaddlesState {
        runs: vec![
            sample_run(run_name, "finished fail"),
            sample_run("teuthology-2024-03-02-rbd-main-smithi", "running"),
        ],
        ..Default::default()
    };

    let mut detail = sample_run(run_name, "finished fail");
    detail["jobs"] = json!([
        sample_job(run_name, 7001, "pass"),
        sample_job(run_name, 7002, "fail"),
        sample_job(run_name, 7003, "dead"),
    ]);
    state.run_details.insert(run_name.to_string(), detail);

    let mut empty = sample_run("empty-run", "queued");
    empty["jobs"] = json!([]);
    state.run_details.insert("empty-run".to_string(), empty);

    state.node_jobs.insert(
        "smithi001".to_string(),
        vec![sample_job(run_name, 7002, "fail"), sample_job(run_name, 7005, "running")],
    );

    state
}

/// Start a mock Paddles seeded with [`seeded_state`].
pub async fn start_mock() -> MockPaddles {
    MockPaddles::start(seeded_state()).await
}

/// Create a test app reading from `paddles_url`.
pub async fn create_test_app(
    paddles_url: &str,
) -> impl actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    let cache = QueryCache::new(CacheSettings::default());
    let client = PaddlesClient::new(paddles_url, Duration::from_millis(1000), cache)
        .expect("Failed to build Paddles client");

    test::init_service(
        App::new()
            .app_data(web::Data::new(client))
            .app_data(web::Data::new(ViewSettings {
                default_page_size: TEST_DEFAULT_PAGE_SIZE,
            }))
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_run_routes)
                    .configure(api::configure_node_routes)
                    .configure(api::configure_grid_event_routes),
            ),
    )
    .await
}

/// GET `uri` and decode the JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// POST a grid event and decode the JSON body.
pub async fn post_grid_event<S>(app: &S, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/grid/events")
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
