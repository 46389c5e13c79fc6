use argon2::Params;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use campusmap_community::infra::neis::NeisClient;
use campusmap_community::password::Passwords;
use campusmap_community::router::build_router;
use campusmap_community::state::AppState;
use campusmap_testing::db::memory_db;
use campusmap_testing::fixture::Fixture;
use campusmap_testing::upstream::{StubDirectory, StubResponse};

pub const TEST_NEIS_KEY: &str = "test-neis-key";

/// A router over a fresh database and a stub directory.
pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
    pub directory: StubDirectory,
}

/// Small argon2 cost so the suite stays fast.
pub fn test_passwords() -> Passwords {
    Passwords::new(Params::new(8, 1, 1, None).unwrap()).unwrap()
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Vec::<(&str, StubResponse)>::new()).await
}

pub async fn spawn_app_with<I>(responses: I) -> TestApp
where
    I: IntoIterator<Item = (&'static str, StubResponse)>,
{
    let db = memory_db().await;
    let directory = StubDirectory::spawn(responses).await;
    let state = AppState {
        db: db.clone(),
        directory: NeisClient::new(&directory.base_url, TEST_NEIS_KEY, "고등학교").unwrap(),
        passwords: test_passwords(),
    };
    let router = build_router(state, Fixture::path("static"));
    TestApp {
        server: TestServer::new(router).unwrap(),
        db,
        directory,
    }
}

pub fn neis_fixture(name: &str) -> StubResponse {
    StubResponse::Json(Fixture::load(&format!("neis/{name}.json")))
}

// ── Seeding through the API ──────────────────────────────────────────────────

pub async fn seed_school(app: &TestApp, name: &str, external_id: &str) -> i64 {
    let body: Value = app
        .server
        .post("/api/schools")
        .json(&json!({"name": name, "externalId": external_id}))
        .await
        .json();
    body["data"]["id"].as_i64().unwrap()
}

pub async fn seed_department(app: &TestApp, school_id: i64, name: &str) -> i64 {
    let body: Value = app
        .server
        .post("/api/departments")
        .json(&json!({"schoolId": school_id, "name": name}))
        .await
        .json();
    body["data"]["id"].as_i64().unwrap()
}

pub async fn seed_user(app: &TestApp, school_id: i64, idname: &str, password: &str) -> i64 {
    let response = app
        .server
        .post("/api/users/register")
        .json(&json!({
            "idname": idname,
            "name": "Kim Minsu",
            "password": password,
            "schoolId": school_id,
        }))
        .await;
    let body: Value = response.json();
    body["data"]["userId"].as_i64().unwrap()
}

pub async fn seed_map(app: &TestApp, name: &str) -> i64 {
    let body: Value = app
        .server
        .post("/api/maps")
        .json(&json!({"name": name}))
        .await
        .json();
    body["data"]["id"].as_i64().unwrap()
}

pub async fn seed_keyword(app: &TestApp, word: &str) -> i64 {
    let body: Value = app
        .server
        .post("/api/keywords")
        .json(&json!({"word": word}))
        .await
        .json();
    body["data"]["id"].as_i64().unwrap()
}

/// Assert a failure envelope with `kind`.
pub fn assert_failure(body: &Value, kind: &str) {
    assert_eq!(body["success"], false, "expected failure, got {body}");
    assert_eq!(body["error"]["kind"], kind, "unexpected error in {body}");
}

/// True when `key` appears anywhere in `value`.
pub fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(key) || map.values().any(|inner| contains_key(inner, key))
        }
        Value::Array(items) => items.iter().any(|inner| contains_key(inner, key)),
        _ => false,
    }
}
