//! Integration tests for focsit-http-client using mockito

use focsit_http_client::{HttpClient, HttpError, RequestBuilderExt};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TestPayload {
    name: String,
    email: String,
}

// === GET ===

#[tokio::test]
async fn test_get_success_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/projects")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"title": "Crop Doctor"}]"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let response = client
        .get(&format!("{}/api/projects", server.url()))
        .header("Accept", "application/json")
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(response.status(), 200);
    let text = response.text().await.expect("Text extraction should succeed");
    assert_eq!(text, r#"[{"title": "Crop Doctor"}]"#);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/events")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = HttpClient::new();
    let response = client
        .get(&format!("{}/api/events", server.url()))
        .send()
        .await
        .expect("Non-2xx is still a response");

    assert_eq!(response.status(), 503);
    assert_eq!(
        response.text().await.expect("Body is readable"),
        "Service Unavailable"
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/contact")
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new();
    let response = client
        .post(&format!("{}/api/contact", server.url()))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(response.status(), 204);
    assert_eq!(response.text().await.expect("Body is readable"), "");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused() {
    let client = HttpClient::new();
    // Nothing listens on port 1
    let result = client.get("http://127.0.0.1:1/api").send().await;

    let err = result.expect_err("Request to closed port should fail");
    assert!(
        matches!(err, HttpError::Connection(_) | HttpError::Timeout),
        "unexpected error: {err:?}"
    );
}

// === POST ===

#[tokio::test]
async fn test_post_json_body_and_headers() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/vacancies")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "Intern",
            "email": "jobs@example.com"
        })))
        .with_status(201)
        .with_body(r#"{"success": true, "message": "posted"}"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let payload = TestPayload {
        name: "Intern".to_string(),
        email: "jobs@example.com".to_string(),
    };
    let response = client
        .post(&format!("{}/api/vacancies", server.url()))
        .header("Accept", "application/json")
        .json(&payload)
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(response.status(), 201);
    let body: serde_json::Value =
        serde_json::from_str(&response.text().await.expect("Body is readable"))
            .expect("Body is JSON");
    assert_eq!(body["message"], "posted");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_error_response_keeps_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/events")
        .with_status(422)
        .with_body(r#"{"error": "Title required"}"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let response = client
        .post(&format!("{}/api/events", server.url()))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Non-2xx is still a response");

    assert_eq!(response.status(), 422);
    assert_eq!(
        response.text().await.expect("Body is readable"),
        r#"{"error": "Title required"}"#
    );

    mock.assert_async().await;
}
