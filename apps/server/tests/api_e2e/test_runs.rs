//! E2E tests: run list.

use super::mock_paddles::MockPaddles;
use super::test_helpers::*;

const RUN: &str = "teuthology-2024-03-01-rados-main-smithi";

/// Rows, columns and display options of a successful fetch.
#[actix_rt::test]
async fn test_list_runs_renders_grid() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["view_state"], "success");
    assert_eq!(body["loading"], false);
    assert_eq!(body["options"]["density"], "compact");
    assert_eq!(body["options"]["height"], 800);
    assert_eq!(body["filter_mode"], "client");

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], RUN);

    let cells = &rows[0]["cells"];
    assert_eq!(cells["user"]["display"], "teuthology");
    assert_eq!(cells["runtime"]["value"], 3630);
    assert_eq!(cells["fail"]["value"], 2);
    assert_eq!(cells["sha1"]["display"], "0123456789abcdef");

    let headers: Vec<&str> = body["columns"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["header_name"].as_str())
        .collect();
    assert!(headers.contains(&"updated"));
    assert!(headers.contains(&"hash"));

    assert_eq!(body["sort_model"][0]["field"], "scheduled");
    assert_eq!(body["sort_model"][0]["sort"], "desc");
}

/// Runs are paged by the server and the total is never known.
#[actix_rt::test]
async fn test_list_runs_uses_server_paging() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs?page=2&pageSize=10").await;

    assert_eq!(status, 200);
    assert_eq!(body["pagination"]["mode"], "server");
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["page_size"], 10);
    assert_eq!(body["pagination"]["row_count"], 9999);
    assert_eq!(body["pagination"]["hide_footer_row_count"], true);
    assert_eq!(mock.requests(), vec!["/runs/?page=3&count=10".to_string()]);
}

/// Garbage paging parameters fall back to defaults.
#[actix_rt::test]
async fn test_list_runs_ignores_bad_paging() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs?page=abc&pageSize=-4").await;

    assert_eq!(status, 200);
    assert_eq!(body["pagination"]["page"], 0);
    assert_eq!(body["pagination"]["page_size"], TEST_DEFAULT_PAGE_SIZE);
    assert_eq!(mock.requests(), vec!["/runs/?page=1&count=25".to_string()]);
}

/// The status filter is sent upstream and echoed back as the filter model.
#[actix_rt::test]
async fn test_list_runs_status_filter() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs?status=running").await;

    assert_eq!(status, 200);
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);
    assert_eq!(
        mock.requests(),
        vec!["/runs/status/running/?page=1&count=25".to_string()]
    );

    let items = body["filter_model"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["field"], "status");
    assert_eq!(items[0]["operator"], "contains");
    assert_eq!(items[0]["value"], "running");
}

/// An upstream failure renders an empty grid, not an HTTP error.
#[actix_rt::test]
async fn test_list_runs_upstream_failure_renders_empty() {
    let mock = start_mock().await;
    mock.set_failing(true);
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(status, 200);
    assert_eq!(body["view_state"], "error");
    assert_eq!(body["loading"], false);
    assert!(body["rows"].as_array().unwrap().is_empty());
    assert!(!body["columns"].as_array().unwrap().is_empty());
}

/// An unreachable service behaves like any other failure.
#[actix_rt::test]
async fn test_list_runs_unreachable_service() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = create_test_app(&closed_url).await;
    let (status, body) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(status, 200);
    assert_eq!(body["view_state"], "error");
    assert!(body["rows"].as_array().unwrap().is_empty());
}

/// Repeated identical queries are served from the cache.
#[actix_rt::test]
async fn test_list_runs_is_cached() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (_, first) = get_json(&app, "/api/v1/runs?page=0&pageSize=25").await;
    let (_, second) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(first["rows"], second["rows"]);
    assert_eq!(mock.requests().len(), 1);
}

/// Failures are not cached: the next request goes upstream again.
#[actix_rt::test]
async fn test_list_runs_failure_is_retried() {
    let mock = start_mock().await;
    mock.set_failing(true);
    let app = create_test_app(&mock.base_url).await;

    let (_, failed) = get_json(&app, "/api/v1/runs").await;
    assert_eq!(failed["view_state"], "error");

    mock.set_failing(false);
    let (_, recovered) = get_json(&app, "/api/v1/runs").await;
    assert_eq!(recovered["view_state"], "success");
    assert_eq!(recovered["rows"].as_array().unwrap().len(), 2);
    assert_eq!(mock.requests().len(), 2);
}

/// Runs with missing fields still render; absent values display empty.
#[actix_rt::test]
async fn test_list_runs_sparse_rows() {
    let mock = MockPaddles::start(super::mock_paddles::MockPaddlesState {
        runs: vec![serde_json::json!({"name": "bare-run", "results": {"pass": "many"}})],
        ..Default::default()
    })
    .await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(status, 200);
    let cells = &body["rows"][0]["cells"];
    assert_eq!(body["rows"][0]["id"], "bare-run");
    assert_eq!(cells["user"]["display"], "");
    assert!(cells["runtime"]["value"].is_null());
    assert!(cells["pass"]["value"].is_null());
}

/// A run without a name does not blank the whole list.
#[actix_rt::test]
async fn test_list_runs_keeps_nameless_run() {
    let mock = MockPaddles::start(super::mock_paddles::MockPaddlesState {
        runs: vec![
            serde_json::json!({"name": "named-run"}),
            serde_json::json!({"suite": "rbd"}),
        ],
        ..Default::default()
    })
    .await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/runs").await;

    assert_eq!(status, 200);
    assert_eq!(body["view_state"], "success");
    assert_eq!(body["rows"].as_array().unwrap().len(), 2);
    assert_eq!(body["rows"][1]["cells"]["suite"]["display"], "rbd");
}
