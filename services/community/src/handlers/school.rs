use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::School;
use crate::error::CommunityError;
use crate::handlers::department::DepartmentResponse;
use crate::handlers::user::UserResponse;
use crate::handlers::{ApiJson, ApiPath, ApiQuery, required_text};
use crate::state::AppState;
use crate::usecase::department::ListDepartmentsUseCase;
use crate::usecase::school::{
    GetSchoolUseCase, ListSchoolUsersUseCase, RegisterSchoolInput, RegisterSchoolUseCase,
    SearchSchoolsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolResponse {
    pub id: i32,
    pub name: String,
    pub external_id: Option<String>,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            external_id: school.external_code,
        }
    }
}

// ── GET /api/schools ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolLookupQuery {
    pub school_id: Option<i32>,
    pub name: Option<String>,
}

/// `?schoolId=` answers one school; otherwise `?name=` answers a list.
pub async fn lookup_schools(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SchoolLookupQuery>,
) -> Result<Response, CommunityError> {
    match (query.school_id, query.name) {
        (Some(id), _) => {
            let usecase = GetSchoolUseCase {
                repo: state.school_repo(),
            };
            let school = usecase.execute(id).await?;
            Ok(Envelope::ok(SchoolResponse::from(school)).into_response())
        }
        (None, Some(name)) => {
            let usecase = SearchSchoolsUseCase {
                repo: state.school_repo(),
            };
            let schools: Vec<SchoolResponse> = usecase
                .execute(&name)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            Ok(Envelope::ok(schools).into_response())
        }
        (None, None) => Err(CommunityError::MissingField("schoolId")),
    }
}

// ── POST /api/schools ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSchoolRequest {
    pub name: Option<String>,
    pub external_id: Option<String>,
}

pub async fn register_school(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterSchoolRequest>,
) -> Result<Envelope<SchoolResponse>, CommunityError> {
    let usecase = RegisterSchoolUseCase {
        repo: state.school_repo(),
    };
    let (school, created) = usecase
        .execute(RegisterSchoolInput {
            name: required_text(body.name, "name")?,
            external_code: body.external_id,
        })
        .await?;
    if created {
        tracing::info!(school_id = school.id, "school registered");
        Ok(Envelope::ok(school.into()))
    } else {
        Ok(Envelope::with_message(school.into(), "already registered"))
    }
}

// ── GET /api/schools/{id}/users ──────────────────────────────────────────────

pub async fn list_school_users(
    State(state): State<AppState>,
    ApiPath(school_id): ApiPath<i32>,
) -> Result<Envelope<Vec<UserResponse>>, CommunityError> {
    let usecase = ListSchoolUsersUseCase {
        schools: state.school_repo(),
        users: state.user_repo(),
    };
    let users = usecase.execute(school_id).await?;
    Ok(Envelope::ok(users.into_iter().map(Into::into).collect()))
}

// ── GET /api/schools/{id}/departments ────────────────────────────────────────

pub async fn list_school_departments(
    State(state): State<AppState>,
    ApiPath(school_id): ApiPath<i32>,
) -> Result<Envelope<Vec<DepartmentResponse>>, CommunityError> {
    let usecase = ListDepartmentsUseCase {
        schools: state.school_repo(),
        departments: state.department_repo(),
    };
    let departments = usecase.execute(school_id).await?;
    Ok(Envelope::ok(
        departments.into_iter().map(Into::into).collect(),
    ))
}
