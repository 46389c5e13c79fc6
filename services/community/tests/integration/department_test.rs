use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{assert_failure, seed_department, seed_school, spawn_app};

#[tokio::test]
async fn should_register_department_once_per_school_and_name() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul Technical", "B10-7010456").await;

    let first: Value = app
        .server
        .post("/api/departments")
        .json(&json!({"schoolId": school, "name": "기계과"}))
        .await
        .json();
    let second: Value = app
        .server
        .post("/api/departments")
        .json(&json!({"schoolId": school, "name": "기계과"}))
        .await
        .json();

    assert!(first.get("message").is_none());
    assert_eq!(second["message"], "already registered");
    assert_eq!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(second["data"]["schoolId"], school);
}

#[tokio::test]
async fn should_allow_same_department_name_in_different_schools() {
    let app = spawn_app().await;
    let a = seed_school(&app, "A High", "A-1").await;
    let b = seed_school(&app, "B High", "B-1").await;

    let first = seed_department(&app, a, "전자과").await;
    let second = seed_department(&app, b, "전자과").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn should_return_404_registering_department_for_unknown_school() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/departments")
        .json(&json!({"schoolId": 404, "name": "기계과"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "SCHOOL_NOT_FOUND");
}

#[tokio::test]
async fn should_bulk_register_and_count_only_new_departments() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul Technical", "B10-7010456").await;
    seed_department(&app, school, "기계과").await;

    let body: Value = app
        .server
        .post("/api/departments/bulk")
        .json(&json!({
            "schoolId": school,
            "departments": [
                {"name": "기계과"},
                {"name": "전자과", "externalCode": "E01"},
                {"name": "건축과"},
            ],
        }))
        .await
        .json();
    assert_eq!(body["data"]["inserted"], 2);

    let listed: Value = app
        .server
        .get(&format!("/api/schools/{school}/departments"))
        .await
        .json();
    let names: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["기계과", "전자과", "건축과"]);
}

#[tokio::test]
async fn should_reject_bulk_entry_without_name() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul Technical", "B10-7010456").await;

    let response = app
        .server
        .post("/api/departments/bulk")
        .json(&json!({"schoolId": school, "departments": [{"name": "기계과"}, {"name": ""}]}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "MISSING_FIELD");
}

#[tokio::test]
async fn should_get_department_by_id() {
    let app = spawn_app().await;
    let school = seed_school(&app, "Seoul Technical", "B10-7010456").await;
    let id = seed_department(&app, school, "기계과").await;

    let body: Value = app
        .server
        .get(&format!("/api/departments/{id}"))
        .await
        .json();
    assert_eq!(body["data"]["name"], "기계과");

    let missing = app.server.get("/api/departments/9999").await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&missing.json(), "DEPARTMENT_NOT_FOUND");
}
