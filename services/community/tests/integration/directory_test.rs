use axum::http::StatusCode;
use serde_json::Value;

use campusmap_testing::upstream::StubResponse;

use crate::helpers::{TEST_NEIS_KEY, assert_failure, neis_fixture, spawn_app, spawn_app_with};

// ── GET /api/schools/search ──────────────────────────────────────────────────

#[tokio::test]
async fn should_proxy_school_search_with_key_and_kind() {
    let app = spawn_app_with([("schoolInfo", neis_fixture("school_info_search"))]).await;

    let response = app
        .server
        .get("/api/schools/search")
        .add_query_param("name", "서울")
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let schools = body["data"].as_array().unwrap();
    assert_eq!(schools.len(), 2);
    assert_eq!(schools[0]["schoolCode"], "7010123");
    assert_eq!(schools[0]["officeCode"], "B10");
    assert_eq!(schools[0]["schoolName"], "서울고등학교");
    assert_eq!(schools[0]["foundDate"], "19460901");

    let sent = app.directory.requests_to("schoolInfo");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["KEY"], TEST_NEIS_KEY);
    assert_eq!(sent[0]["Type"], "json");
    assert_eq!(sent[0]["SCHUL_NM"], "서울");
    assert_eq!(sent[0]["SCHUL_KND_SC_NM"], "고등학교");
}

#[tokio::test]
async fn should_return_empty_list_when_directory_has_no_data() {
    let app = spawn_app().await;

    let body: Value = app
        .server
        .get("/api/schools/search")
        .add_query_param("name", "없는학교")
        .await
        .json();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn should_require_search_name() {
    let app = spawn_app().await;

    let response = app.server.get("/api/schools/search").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "MISSING_FIELD");
    assert!(app.directory.requests().is_empty());
}

#[tokio::test]
async fn should_surface_upstream_http_failure_as_500() {
    let app = spawn_app_with([("schoolInfo", StubResponse::Status(503))]).await;

    let response = app
        .server
        .get("/api/schools/search")
        .add_query_param("name", "서울")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure(&response.json(), "DIRECTORY_UNAVAILABLE");
}

#[tokio::test]
async fn should_surface_upstream_error_result_as_500() {
    let app = spawn_app_with([("schoolInfo", neis_fixture("error_result"))]).await;

    let response = app
        .server
        .get("/api/schools/search")
        .add_query_param("name", "서울")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_failure(&body, "DIRECTORY_UNAVAILABLE");
    assert!(body["error"]["message"].as_str().unwrap().contains("ERROR-290"));
}

// ── GET /api/schools/detail ──────────────────────────────────────────────────

#[tokio::test]
async fn should_return_first_matching_school_detail() {
    let app = spawn_app_with([("schoolInfo", neis_fixture("school_info_search"))]).await;

    let body: Value = app
        .server
        .get("/api/schools/detail")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "7010123")
        .await
        .json();

    assert_eq!(body["data"]["englishName"], "Seoul High School");
    assert_eq!(body["data"]["phone"], "02-3470-1234");
    assert_eq!(body["data"]["schoolAnniversary"], "19461001");

    let sent = app.directory.requests_to("schoolInfo");
    assert_eq!(sent[0]["ATPT_OFCDC_SC_CODE"], "B10");
    assert_eq!(sent[0]["SD_SCHUL_CODE"], "7010123");
}

#[tokio::test]
async fn should_return_404_when_directory_has_no_such_school() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/api/schools/detail")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "0000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_failure(&response.json(), "DIRECTORY_RECORD_NOT_FOUND");
}

#[tokio::test]
async fn should_require_both_codes_for_detail() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/api/schools/detail")
        .add_query_param("officeCode", "B10")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_failure(&body, "MISSING_FIELD");
    assert_eq!(body["error"]["message"], "missing field: schoolCode");
}

// ── GET /api/schools/departments ─────────────────────────────────────────────

#[tokio::test]
async fn should_list_directory_departments_skipping_blank_names() {
    let app = spawn_app_with([("schoolMajorinfo", neis_fixture("school_major_info"))]).await;

    let body: Value = app
        .server
        .get("/api/schools/departments")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "7010456")
        .await
        .json();

    assert_eq!(
        body["data"],
        serde_json::json!([{"name": "기계과"}, {"name": "전자과"}])
    );
}

// ── GET /api/schools/meals ───────────────────────────────────────────────────

#[tokio::test]
async fn should_normalize_meal_dishes() {
    let app = spawn_app_with([("mealServiceDietInfo", neis_fixture("meal_service"))]).await;

    let body: Value = app
        .server
        .get("/api/schools/meals")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "7010123")
        .add_query_param("date", "20240315")
        .await
        .json();

    let meal = &body["data"][0];
    assert_eq!(meal["date"], "20240315");
    assert_eq!(meal["mealType"], "중식");
    assert_eq!(meal["dishes"], "현미밥, 된장국 (5.6), 김치");
    assert_eq!(meal["calories"], "812.3 Kcal");

    let sent = app.directory.requests_to("mealServiceDietInfo");
    assert_eq!(sent[0]["MLSV_YMD"], "20240315");
}

#[tokio::test]
async fn should_reject_malformed_meal_date() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/api/schools/meals")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "7010123")
        .add_query_param("date", "2024-03-15")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_failure(&response.json(), "INVALID_FIELD");
    assert!(app.directory.requests().is_empty());
}

// ── GET /api/schools/schedules ───────────────────────────────────────────────

#[tokio::test]
async fn should_list_schedule_events_in_range() {
    let app = spawn_app_with([("SchoolSchedule", neis_fixture("school_schedule"))]).await;

    let body: Value = app
        .server
        .get("/api/schools/schedules")
        .add_query_param("officeCode", "B10")
        .add_query_param("schoolCode", "7010123")
        .add_query_param("from", "20240301")
        .add_query_param("to", "20240331")
        .await
        .json();

    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["eventName"], "입학식");
    assert_eq!(events[1]["eventDescription"], "신입생 입학식");

    let sent = app.directory.requests_to("SchoolSchedule");
    assert_eq!(sent[0]["AA_FROM_YMD"], "20240301");
    assert_eq!(sent[0]["AA_TO_YMD"], "20240331");
}
