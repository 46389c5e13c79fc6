use axum::http::StatusCode;
use crate::helpers::spawn_app;

#[tokio::test]
async fn should_answer_liveness_probe() {
    let app = spawn_app().await;

    app.server.get("/healthz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_answer_readiness_probe_when_database_is_reachable() {
    let app = spawn_app().await;

    app.server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_serve_static_index_for_unrouted_paths() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("campusmap"));
}

#[tokio::test]
async fn should_return_404_for_missing_static_file() {
    let app = spawn_app().await;

    let response = app.server.get("/missing.txt").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_echo_request_id_header() {
    let app = spawn_app().await;

    let response = app.server.get("/healthz").await;

    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}
