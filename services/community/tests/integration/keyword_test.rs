use axum::http::StatusCode;
use serde_json::{Value, json};

use campusmap_community::domain::repository::KeywordRepository;
use campusmap_community::infra::db::DbKeywordRepository;

use crate::helpers::{assert_failure, seed_keyword, seed_school, seed_user, spawn_app};

fn keyword_ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn should_register_keyword_idempotently() {
    let app = spawn_app().await;

    let first = seed_keyword(&app, "축구").await;
    let second = seed_keyword(&app, "축구").await;

    assert_eq!(first, second);
    let listed: Value = app.server.get("/api/keywords").await.json();
    assert_eq!(keyword_ids(&listed), vec![first]);
}

#[tokio::test]
async fn should_require_keyword_word() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/keywords")
        .json(&json!({"word": ""}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "MISSING_FIELD");
}

#[tokio::test]
async fn should_replace_user_keyword_set() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let soccer = seed_keyword(&app, "축구").await;
    let music = seed_keyword(&app, "음악").await;
    let coding = seed_keyword(&app, "코딩").await;

    let first: Value = app
        .server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [soccer, coding]}))
        .await
        .json();
    assert_eq!(keyword_ids(&first), vec![soccer, coding]);

    let second: Value = app
        .server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [music]}))
        .await
        .json();
    assert_eq!(keyword_ids(&second), vec![music]);

    let listed: Value = app
        .server
        .get(&format!("/api/users/{user}/keywords"))
        .await
        .json();
    assert_eq!(keyword_ids(&listed), vec![music]);
}

#[tokio::test]
async fn should_clear_user_keywords_with_empty_set() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let soccer = seed_keyword(&app, "축구").await;

    app.server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [soccer]}))
        .await
        .assert_status(StatusCode::OK);
    let cleared: Value = app
        .server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": []}))
        .await
        .json();

    assert_eq!(cleared["data"], json!([]));
}

#[tokio::test]
async fn should_collapse_duplicate_keyword_ids() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let soccer = seed_keyword(&app, "축구").await;

    let body: Value = app
        .server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [soccer, soccer, soccer]}))
        .await
        .json();

    assert_eq!(keyword_ids(&body), vec![soccer]);
}

#[tokio::test]
async fn should_keep_previous_set_when_a_keyword_is_unknown() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await;
    let soccer = seed_keyword(&app, "축구").await;
    app.server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [soccer]}))
        .await
        .assert_status(StatusCode::OK);

    let response = app
        .server
        .post(&format!("/api/users/{user}/keywords"))
        .json(&json!({"keywordIds": [soccer, 9999]}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "KEYWORD_NOT_FOUND");

    let listed: Value = app
        .server
        .get(&format!("/api/users/{user}/keywords"))
        .await
        .json();
    assert_eq!(keyword_ids(&listed), vec![soccer]);
}

#[tokio::test]
async fn should_roll_back_reconcile_when_insert_fails() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let user = seed_user(&app, school, "alice", "pw").await as i32;
    let soccer = seed_keyword(&app, "축구").await as i32;
    let music = seed_keyword(&app, "음악").await as i32;
    let repo = DbKeywordRepository { db: app.db.clone() };
    repo.set_user_keywords(user, &[soccer, music]).await.unwrap();

    // The foreign key on keyword_id fails the insert after the delete ran.
    let result = repo.set_user_keywords(user, &[music, 4242]).await;

    assert!(result.is_err());
    let kept: Vec<i32> = repo
        .list_by_user(user)
        .await
        .unwrap()
        .into_iter()
        .map(|k| k.id)
        .collect();
    assert_eq!(kept, vec![soccer, music]);
}

#[tokio::test]
async fn should_return_404_for_keywords_of_unknown_user() {
    let app = spawn_app().await;

    let listed = app.server.get("/api/users/55/keywords").await;
    listed.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&listed.json(), "USER_NOT_FOUND");

    let set = app
        .server
        .post("/api/users/55/keywords")
        .json(&json!({"keywordIds": []}))
        .await;
    set.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&set.json(), "USER_NOT_FOUND");
}
