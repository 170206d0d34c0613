use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use task_store_lib::{router, AppState};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::seeded())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize payload")))
        .expect("build request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse response")
    };
    (status, body)
}

#[tokio::test]
async fn list_returns_seed_tasks() {
    let app = app();
    let (status, body) = send(&app, empty_request("GET", "/api/tasks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "text": "Learn Docker", "completed": false},
            {"id": 2, "text": "Build a TO-DO app", "completed": true},
            {"id": 3, "text": "Deploy the app", "completed": false},
        ])
    );
}

#[tokio::test]
async fn create_assigns_next_id() {
    let app = app();
    let (status, body) = send(&app, json_request("POST", "/api/tasks", json!({"text": "Write docs"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 4, "text": "Write docs", "completed": false}));

    let (_, list) = send(&app, empty_request("GET", "/api/tasks")).await;
    assert_eq!(list.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn create_without_text_is_rejected() {
    let app = app();
    for payload in [json!({}), json!({"text": ""}), json!({"text": 5})] {
        let (status, body) = send(&app, json_request("POST", "/api/tasks", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Task text is required"}));
    }

    let (_, list) = send(&app, empty_request("GET", "/api/tasks")).await;
    assert_eq!(list.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn update_patches_completion() {
    let app = app();
    let (status, body) = send(&app, json_request("PUT", "/api/tasks/1", json!({"completed": true}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "text": "Learn Docker", "completed": true}));
}

#[tokio::test]
async fn update_patches_text() {
    let app = app();
    let (status, body) = send(&app, json_request("PUT", "/api/tasks/3", json!({"text": "Ship it"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 3, "text": "Ship it", "completed": false}));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();
    for uri in ["/api/tasks/999", "/api/tasks/abc"] {
        let (status, body) = send(&app, json_request("PUT", uri, json!({"completed": true}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Task not found"}));
    }
}

#[tokio::test]
async fn update_with_empty_text_is_rejected() {
    let app = app();
    let (status, _) = send(&app, json_request("PUT", "/api/tasks/1", json!({"text": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, empty_request("GET", "/api/tasks")).await;
    assert_eq!(list[0]["text"], "Learn Docker");
}

#[tokio::test]
async fn delete_removes_task() {
    let app = app();
    let (status, body) = send(&app, empty_request("DELETE", "/api/tasks/2")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&app, empty_request("GET", "/api/tasks")).await;
    let ids: Vec<u64> = list
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let (status, _) = send(&app, empty_request("DELETE", "/api/tasks/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let app = app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/tasks")
        .header("origin", "http://localhost:8080")
        .body(Body::empty())
        .expect("build request");
    let response = app.clone().oneshot(request).await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api/tasks/1")
        .header("origin", "http://localhost:8080")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .expect("build request");
    let response = app.oneshot(preflight).await.expect("request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("access-control-allow-methods"));
}
