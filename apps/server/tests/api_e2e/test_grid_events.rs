//! E2E tests: grid events folded into the query string.

use serde_json::json;

use super::test_helpers::*;

/// Moving to another page asks for a refetch.
#[actix_rt::test]
async fn test_page_change_requests_refetch() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = post_grid_event(
        &app,
        json!({
            "query": {"page": "0", "pageSize": "25"},
            "event": {"type": "page_change", "payload": {"page": 2}}
        }),
    )
    .await;

    assert_eq!(status, 200, "{body}");
    assert_eq!(body["query"]["page"], 2);
    assert_eq!(body["query"]["pageSize"], 25);
    assert_eq!(body["query_string"], "page=2&pageSize=25");
    assert_eq!(body["refetch"], true);
    assert_eq!(body["view_state"], "loading");
    assert!(mock.requests().is_empty());
}

/// An event that changes nothing leaves the view alone.
#[actix_rt::test]
async fn test_noop_event_skips_refetch() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = post_grid_event(
        &app,
        json!({
            "query": {"page": 3, "pageSize": 25},
            "event": {"type": "page_change", "payload": {"page": 3}}
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["refetch"], false);
    assert_eq!(body["view_state"], "idle");
}

/// Page size changes are clamped and keep the filter.
#[actix_rt::test]
async fn test_page_size_change_is_clamped() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (_, body) = post_grid_event(
        &app,
        json!({
            "query": {"status": "fail"},
            "event": {"type": "pagination_model_change", "payload": {"page": 1, "pageSize": 5000}}
        }),
    )
    .await;

    assert_eq!(body["query"]["page"], 1);
    assert_eq!(body["query"]["pageSize"], 1000);
    assert_eq!(body["query"]["status"], "fail");
    assert_eq!(body["query_string"], "page=1&pageSize=1000&status=fail");
}

/// Setting then clearing the status filter round-trips through the URL.
#[actix_rt::test]
async fn test_filter_round_trip() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (_, set) = post_grid_event(
        &app,
        json!({
            "query": {},
            "event": {
                "type": "filter_model_change",
                "payload": {"model": {"items": [
                    {"field": "status", "operator": "contains", "value": "fail"}
                ]}}
            }
        }),
    )
    .await;

    assert_eq!(set["query"]["status"], "fail");
    assert_eq!(set["query_string"], "page=0&pageSize=25&status=fail");
    assert_eq!(set["refetch"], true);

    let (_, cleared) = post_grid_event(
        &app,
        json!({
            "query": {"status": "fail"},
            "event": {"type": "filter_model_change", "payload": {"model": {"items": []}}}
        }),
    )
    .await;

    assert!(cleared["query"].get("status").is_none());
    assert_eq!(cleared["query_string"], "page=0&pageSize=25");
    assert_eq!(cleared["refetch"], true);
}

/// The written query string reads back as the same state.
#[actix_rt::test]
async fn test_query_string_feeds_list_view() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (_, event) = post_grid_event(
        &app,
        json!({
            "query": {"page": "4"},
            "event": {"type": "page_size_change", "payload": {"pageSize": 10}}
        }),
    )
    .await;
    let query_string = event["query_string"].as_str().unwrap();

    let (_, view) = get_json(&app, &format!("/api/v1/runs?{query_string}")).await;

    assert_eq!(view["pagination"]["page"], 4);
    assert_eq!(view["pagination"]["page_size"], 10);
    assert_eq!(mock.requests(), vec!["/runs/?page=5&count=10".to_string()]);
}

/// Unknown event types are rejected with the shared error body.
#[actix_rt::test]
async fn test_malformed_event_is_rejected() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = post_grid_event(
        &app,
        json!({"event": {"type": "sort_change", "payload": {}}}),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}
