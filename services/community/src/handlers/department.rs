use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::{Department, NewDepartment};
use crate::error::CommunityError;
use crate::handlers::{ApiJson, ApiPath, required, required_text};
use crate::state::AppState;
use crate::usecase::department::{
    GetDepartmentUseCase, RegisterDepartmentUseCase, RegisterDepartmentsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: i32,
    pub school_id: i32,
    pub name: String,
    pub external_code: Option<String>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            school_id: department.school_id,
            name: department.name,
            external_code: department.external_code,
        }
    }
}

#[derive(Serialize)]
pub struct BulkRegisterResponse {
    pub inserted: u64,
}

// ── GET /api/departments/{id} ────────────────────────────────────────────────

pub async fn get_department(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Envelope<DepartmentResponse>, CommunityError> {
    let usecase = GetDepartmentUseCase {
        repo: state.department_repo(),
    };
    Ok(Envelope::ok(usecase.execute(id).await?.into()))
}

// ── POST /api/departments ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDepartmentRequest {
    pub school_id: Option<i32>,
    pub name: Option<String>,
    pub external_code: Option<String>,
}

pub async fn register_department(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterDepartmentRequest>,
) -> Result<Envelope<DepartmentResponse>, CommunityError> {
    let school_id = required(body.school_id, "schoolId")?;
    let department = NewDepartment {
        name: required_text(body.name, "name")?,
        external_code: body.external_code,
    };
    let usecase = RegisterDepartmentUseCase {
        schools: state.school_repo(),
        departments: state.department_repo(),
    };
    let (department, created) = usecase.execute(school_id, department).await?;
    if created {
        Ok(Envelope::ok(department.into()))
    } else {
        Ok(Envelope::with_message(department.into(), "already registered"))
    }
}

// ── POST /api/departments/bulk ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntryRequest {
    pub name: Option<String>,
    pub external_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRegisterRequest {
    pub school_id: Option<i32>,
    pub departments: Option<Vec<DepartmentEntryRequest>>,
}

pub async fn register_departments(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BulkRegisterRequest>,
) -> Result<Envelope<BulkRegisterResponse>, CommunityError> {
    let school_id = required(body.school_id, "schoolId")?;
    let departments = required(body.departments, "departments")?
        .into_iter()
        .map(|entry| NewDepartment {
            name: entry.name.unwrap_or_default(),
            external_code: entry.external_code,
        })
        .collect();
    let usecase = RegisterDepartmentsUseCase {
        schools: state.school_repo(),
        departments: state.department_repo(),
    };
    let inserted = usecase.execute(school_id, departments).await?;
    Ok(Envelope::ok(BulkRegisterResponse { inserted }))
}
