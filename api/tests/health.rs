use serde_json::Value;

mod common;

#[tokio::test]
async fn health_reports_degraded_without_classifier() {
    let server = common::server();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["classifier_ready"], false);
    assert_eq!(body["vision_configured"], false);
}

#[tokio::test]
async fn service_info_lists_endpoints() {
    let server = common::server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "ChewCheck API");
    assert_eq!(body["endpoints"]["analyze"], "/api/analyze-food");
}

#[tokio::test]
async fn config_exposes_build_info() {
    let server = common::server();

    let response = server.get("/config").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "chewcheck-api");
}
