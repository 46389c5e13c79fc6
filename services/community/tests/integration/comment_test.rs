use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{assert_failure, seed_map, seed_school, seed_user, spawn_app};

#[tokio::test]
async fn should_create_and_list_maps() {
    let app = spawn_app().await;
    let library = seed_map(&app, "도서관").await;
    let gym = seed_map(&app, "체육관").await;

    let body: Value = app.server.get("/api/maps").await.json();
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![library, gym]);

    let one: Value = app.server.get(&format!("/api/maps/{gym}")).await.json();
    assert_eq!(one["data"]["name"], "체육관");
    assert!(one["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn should_return_404_for_unknown_map() {
    let app = spawn_app().await;

    let response = app.server.get("/api/maps/8").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "MAP_NOT_FOUND");
}

#[tokio::test]
async fn should_post_comments_on_a_map_in_order() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let map = seed_map(&app, "도서관").await;

    for content in ["first", "second"] {
        app.server
            .post(&format!("/api/maps/{map}/comments"))
            .json(&json!({"userId": user, "content": content}))
            .await
            .assert_status(StatusCode::OK);
    }

    let body: Value = app
        .server
        .get(&format!("/api/maps/{map}/comments"))
        .await
        .json();
    let comments = body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first");
    assert_eq!(comments[1]["content"], "second");
    assert_eq!(comments[0]["userId"], user);
    assert_eq!(comments[0]["mapId"], map);
}

#[tokio::test]
async fn should_reject_comment_from_unknown_user() {
    let app = spawn_app().await;
    let map = seed_map(&app, "도서관").await;

    let response = app
        .server
        .post(&format!("/api/maps/{map}/comments"))
        .json(&json!({"userId": 900, "content": "hi"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_comment_on_unknown_map() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;

    let response = app
        .server
        .post("/api/maps/321/comments")
        .json(&json!({"userId": user, "content": "hi"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "MAP_NOT_FOUND");
}

#[tokio::test]
async fn should_require_comment_content() {
    let app = spawn_app().await;
    let map = seed_map(&app, "도서관").await;

    let response = app
        .server
        .post(&format!("/api/maps/{map}/comments"))
        .json(&json!({"userId": 1, "content": "  "}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "MISSING_FIELD");
}

#[tokio::test]
async fn should_delete_comment_once() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let map = seed_map(&app, "도서관").await;
    let created: Value = app
        .server
        .post(&format!("/api/maps/{map}/comments"))
        .json(&json!({"userId": user, "content": "bye"}))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let deleted: Value = app
        .server
        .delete(&format!("/api/comments/{id}"))
        .await
        .json();
    assert_eq!(deleted["data"]["id"], id);
    assert_eq!(deleted["data"]["content"], "bye");
    assert_eq!(deleted["data"]["userId"], user);

    let again = app.server.delete(&format!("/api/comments/{id}")).await;
    again.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&again.json(), "COMMENT_NOT_FOUND");

    let listed: Value = app
        .server
        .get(&format!("/api/maps/{map}/comments"))
        .await
        .json();
    assert_eq!(listed["data"], json!([]));
}
