use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::{Value, json};

mod common;

// A one-pixel JPEG is overkill here; the pipeline treats image bytes as
// opaque, so any payload exercises it.
const IMAGE_BASE64: &str = "aGVsbG8gY2hld2NoZWNr";

fn multipart_body(boundary: &str, content_type: &str, data: &str) -> Bytes {
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"food.jpg\"\r\n\
         Content-Type: {content_type}\r\n\r\n\
         {data}\r\n\
         --{boundary}--\r\n"
    );
    Bytes::from(body)
}

#[tokio::test]
async fn analyze_without_classifier_is_service_unavailable() {
    let server = common::server();

    let response = server
        .post("/api/analyze-food")
        .json(&json!({ "imageBase64": IMAGE_BASE64 }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn invalid_base64_is_rejected() {
    let server = common::server();

    let response = server
        .post("/api/analyze-food")
        .json(&json!({ "imageBase64": "not base64 at all!!!" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_base64_is_rejected() {
    let server = common::server();

    let response = server
        .post("/api/analyze-food")
        .json(&json!({ "imageBase64": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_classifier_degrades_to_unknown_food() {
    let server = common::server_with_unreachable_classifier();

    let response = server
        .post("/api/analyze-food")
        .json(&json!({
            "imageBase64": IMAGE_BASE64,
            "userContext": { "hasBraces": false, "dietRestrictions": [] }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["food_name"], "Unknown Food");
    assert_eq!(body["data"]["source"], "mock");
    assert_eq!(body["data"]["verdict"], "safe");
    assert!(!body["data"]["reasons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_context_values_are_ignored() {
    let server = common::server_with_unreachable_classifier();

    let response = server
        .post("/api/analyze-food")
        .json(&json!({
            "imageBase64": IMAGE_BASE64,
            "userContext": {
                "hasBraces": false,
                "dietRestrictions": ["keto", "none"],
                "recentProcedures": ["whitening"]
            }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["verdict"], "safe");
}

#[tokio::test]
async fn multipart_without_image_is_rejected() {
    let server = common::server_with_unreachable_classifier();
    let boundary = "chewcheck-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"context\"\r\n\r\n\
         {{}}\r\n\
         --{boundary}--\r\n"
    );

    let response = server
        .post("/api/analyze-food/image")
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .bytes(Bytes::from(body))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn multipart_with_non_image_part_is_rejected() {
    let server = common::server_with_unreachable_classifier();
    let boundary = "chewcheck-test-boundary";

    let response = server
        .post("/api/analyze-food/image")
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .bytes(multipart_body(boundary, "text/plain", "hello"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_image_is_rejected() {
    let server = common::server_with_unreachable_classifier();
    let boundary = "chewcheck-test-boundary";
    let oversized = "a".repeat(10 * 1024 * 1024 + 1);

    let response = server
        .post("/api/analyze-food/image")
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .bytes(multipart_body(boundary, "image/jpeg", &oversized))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn multipart_image_is_analyzed() {
    let server = common::server_with_unreachable_classifier();
    let boundary = "chewcheck-test-boundary";

    let response = server
        .post("/api/analyze-food/image")
        .content_type(&format!("multipart/form-data; boundary={boundary}"))
        .bytes(multipart_body(boundary, "image/jpeg", "fake-jpeg-bytes"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["food_name"], "Unknown Food");
}
