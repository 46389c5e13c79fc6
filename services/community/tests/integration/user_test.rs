use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{
    assert_failure, contains_key, seed_department, seed_school, seed_user, spawn_app,
};

// ── GET /api/users/idname/{idname} ───────────────────────────────────────────

#[tokio::test]
async fn should_report_handle_availability() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    seed_user(&app, school, "alice", "secret-1").await;

    let taken: Value = app.server.get("/api/users/idname/alice").await.json();
    assert_eq!(taken["data"], json!({"idname": "alice", "available": false}));
    assert_eq!(taken["message"], "already taken");

    let free: Value = app.server.get("/api/users/idname/bob").await.json();
    assert_eq!(free["data"]["available"], true);
    assert_eq!(free["message"], "available");
}

#[tokio::test]
async fn should_reject_malformed_handle() {
    let app = spawn_app().await;

    let response = app.server.get("/api/users/idname/not%20valid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "INVALID_HANDLE");
}

// ── POST /api/users/register ─────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_and_hide_password() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let department = seed_department(&app, school, "문과").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({
            "idname": "alice",
            "name": "Alice",
            "password": "secret-1",
            "schoolId": school,
            "departmentId": department,
            "grade": 2,
            "classNum": 3,
            "comment": "hello",
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let id = response.json::<Value>()["data"]["userId"].as_i64().unwrap();

    let user: Value = app.server.get(&format!("/api/users/{id}")).await.json();
    assert_eq!(user["data"]["idname"], "alice");
    assert_eq!(user["data"]["grade"], 2);
    assert_eq!(user["data"]["classNum"], 3);
    assert_eq!(user["data"]["departmentId"], department);
    assert!(user["data"]["createdAt"].as_str().unwrap().ends_with('Z'));
    assert!(!contains_key(&user, "password"));
    assert!(!contains_key(&user, "passwordHash"));
}

#[tokio::test]
async fn should_return_409_for_duplicate_handle() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    seed_user(&app, school, "alice", "secret-1").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({"idname": "alice", "name": "Other", "password": "pw", "schoolId": school}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_failure(&response.json(), "USER_ALREADY_EXISTS");
}

#[tokio::test]
async fn should_require_password_on_register() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({"idname": "alice", "name": "Alice", "schoolId": school}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_failure(&body, "MISSING_FIELD");
    assert_eq!(body["error"]["message"], "missing field: password");
}

#[tokio::test]
async fn should_reject_department_of_another_school() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let other = seed_school(&app, "Busan High", "C10-1").await;
    let foreign_department = seed_department(&app, other, "이과").await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({
            "idname": "alice",
            "name": "Alice",
            "password": "pw",
            "schoolId": school,
            "departmentId": foreign_department,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "INVALID_FIELD");
}

#[tokio::test]
async fn should_return_404_registering_into_unknown_school() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({"idname": "alice", "name": "Alice", "password": "pw", "schoolId": 12}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "SCHOOL_NOT_FOUND");
}

// ── POST /api/users/login ────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_password() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let id = seed_user(&app, school, "alice", "secret-1").await;

    let response = app
        .server
        .post("/api/users/login")
        .json(&json!({"idname": "alice", "password": "secret-1"}))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], id);
    assert!(!contains_key(&body, "password"));
}

#[tokio::test]
async fn should_return_same_401_for_wrong_password_and_unknown_user() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    seed_user(&app, school, "alice", "secret-1").await;

    let wrong_password = app
        .server
        .post("/api/users/login")
        .json(&json!({"idname": "alice", "password": "nope"}))
        .await;
    let unknown_user = app
        .server
        .post("/api/users/login")
        .json(&json!({"idname": "nobody", "password": "secret-1"}))
        .await;

    wrong_password.assert_status(StatusCode::UNAUTHORIZED);
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);
    let a: Value = wrong_password.json();
    let b: Value = unknown_user.json();
    assert_failure(&a, "INVALID_CREDENTIALS");
    assert_eq!(a, b);
}

// ── GET/PUT /api/users/{id} ──────────────────────────────────────────────────

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let app = spawn_app().await;

    let response = app.server.get("/api/users/31337").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_update_profile_fields_and_keep_the_rest() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let id = seed_user(&app, school, "alice", "secret-1").await;

    let response = app
        .server
        .put(&format!("/api/users/{id}"))
        .json(&json!({"comment": "updated", "grade": 3}))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["comment"], "updated");
    assert_eq!(body["data"]["grade"], 3);
    assert_eq!(body["data"]["name"], "Kim Minsu");
    assert_eq!(body["data"]["idname"], "alice");
    assert!(!contains_key(&body, "password"));
    assert!(!contains_key(&body, "passwordHash"));

    let fetched: Value = app.server.get(&format!("/api/users/{id}")).await.json();
    assert_eq!(fetched["data"]["comment"], "updated");
    assert!(!contains_key(&fetched, "password"));
    assert!(!contains_key(&fetched, "passwordHash"));
}

#[tokio::test]
async fn should_change_password_through_update() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let id = seed_user(&app, school, "alice", "secret-1").await;

    let updated = app
        .server
        .put(&format!("/api/users/{id}"))
        .json(&json!({"password": "secret-2"}))
        .await;
    updated.assert_status(StatusCode::OK);
    assert!(!contains_key(&updated.json::<Value>(), "password"));

    app.server
        .post("/api/users/login")
        .json(&json!({"idname": "alice", "password": "secret-1"}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .post("/api/users/login")
        .json(&json!({"idname": "alice", "password": "secret-2"}))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_reject_blank_name_on_update() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul High", "B10-1").await;
    let id = seed_user(&app, school, "alice", "secret-1").await;

    let response = app
        .server
        .put(&format!("/api/users/{id}"))
        .json(&json!({"name": "   "}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "INVALID_FIELD");
}

#[tokio::test]
async fn should_return_404_updating_unknown_user() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/users/404")
        .json(&json!({"comment": "x"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_non_numeric_user_id() {
    let app = spawn_app().await;

    let response = app.server.get("/api/users/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "INVALID_FIELD");
}
