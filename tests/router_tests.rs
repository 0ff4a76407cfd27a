// tests/router_tests.rs

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use quiz_backend::{config::Config, routes, state::AppState, store::Store};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds the router over a fresh database file without binding a socket.
async fn test_router() -> Router {
    let db_path = std::env::temp_dir().join(format!("quiz-router-{}.db", uuid::Uuid::new_v4()));
    let database_url = format!("sqlite://{}", db_path.display());

    let store = Store::connect(&database_url)
        .await
        .expect("Failed to open test database");
    store
        .initialize()
        .await
        .expect("Failed to initialize test database");

    let config = Config {
        database_url,
        port: 0,
        admin_password: "s3cret".to_string(),
        static_dir: "public-does-not-exist".to_string(),
        log_dir: "logs".to_string(),
        rust_log: "error".to_string(),
        invalid_port: None,
    };

    routes::create_router(AppState { store, config })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

#[tokio::test]
async fn answer_without_content_type_is_recorded_as_empty() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/answer")
                .body(Body::from(r#"{"candidateId":1,"questionId":1,"answer":"c"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "correct": 0 }));

    let response = app
        .oneshot(
            Request::post("/api/answer")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"candidateId":1,"questionId":1,"answer":"c"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "correct": 1 }));
}

#[tokio::test]
async fn admin_gate_uses_configured_secret() {
    let app = test_router().await;

    let rejected = app
        .clone()
        .oneshot(
            Request::get("/api/admin/candidates?password=admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(rejected).await, json!({ "error": "unauthorized" }));

    let accepted = app
        .oneshot(
            Request::get("/api/admin/candidates?password=s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(body_json(accepted).await, json!([]));
}
