//! E2E tests: health and readiness.

use super::test_helpers::*;

#[actix_rt::test]
async fn test_health() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[actix_rt::test]
async fn test_ready_when_paddles_answers() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (status, body) = get_json(&app, "/api/v1/ready").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ready");
    assert_eq!(mock.requests(), vec!["/".to_string()]);
}

/// Readiness is never cached.
#[actix_rt::test]
async fn test_not_ready_when_paddles_fails() {
    let mock = start_mock().await;
    let app = create_test_app(&mock.base_url).await;

    let (ok, _) = get_json(&app, "/api/v1/ready").await;
    assert_eq!(ok, 200);

    mock.set_failing(true);
    let (status, body) = get_json(&app, "/api/v1/ready").await;

    assert_eq!(status, 503);
    assert_eq!(body["error"], "NOT_READY");
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Paddles unreachable")),
        "{body}"
    );
}
