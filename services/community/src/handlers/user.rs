use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::User;
use crate::error::CommunityError;
use crate::handlers::{ApiJson, ApiPath, required, required_text};
use crate::state::AppState;
use crate::usecase::user::{
    CheckLoginIdUseCase, GetUserUseCase, LoginUseCase, RegisterUserInput, RegisterUserUseCase,
    UpdateUserInput, UpdateUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of a user. Deliberately has no password field.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub idname: String,
    pub name: String,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub school_id: i32,
    pub department_id: Option<i32>,
    #[serde(serialize_with = "campusmap_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            idname: user.login_id,
            name: user.name,
            comment: user.comment,
            grade: user.grade,
            class_num: user.class_num,
            profile_photo: user.profile_photo,
            school_id: user.school_id,
            department_id: user.department_id,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub idname: String,
    pub available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i32,
}

// ── GET /api/users/idname/{idname} ───────────────────────────────────────────

pub async fn check_idname(
    State(state): State<AppState>,
    ApiPath(idname): ApiPath<String>,
) -> Result<Envelope<AvailabilityResponse>, CommunityError> {
    let usecase = CheckLoginIdUseCase {
        repo: state.user_repo(),
    };
    let available = usecase.execute(&idname).await?;
    let message = if available {
        "available"
    } else {
        "already taken"
    };
    Ok(Envelope::with_message(
        AvailabilityResponse { idname, available },
        message,
    ))
}

// ── POST /api/users/register ─────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub idname: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub school_id: Option<i32>,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub department_id: Option<i32>,
}

pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<Envelope<RegisterResponse>, CommunityError> {
    let input = RegisterUserInput {
        login_id: required_text(body.idname, "idname")?,
        name: required_text(body.name, "name")?,
        password: required_text(body.password, "password")?,
        school_id: required(body.school_id, "schoolId")?,
        comment: body.comment,
        grade: body.grade,
        class_num: body.class_num,
        profile_photo: body.profile_photo,
        department_id: body.department_id,
    };
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        schools: state.school_repo(),
        departments: state.department_repo(),
        passwords: state.passwords.clone(),
    };
    let user_id = usecase.execute(input).await?;
    Ok(Envelope::ok(RegisterResponse { user_id }))
}

// ── POST /api/users/login ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub idname: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Envelope<UserResponse>, CommunityError> {
    let idname = required_text(body.idname, "idname")?;
    let password = required_text(body.password, "password")?;
    let usecase = LoginUseCase {
        repo: state.user_repo(),
        passwords: state.passwords.clone(),
    };
    let user = usecase.execute(&idname, password).await?;
    Ok(Envelope::ok(user.into()))
}

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Envelope<UserResponse>, CommunityError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    Ok(Envelope::ok(user.into()))
}

// ── PUT /api/users/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub department_id: Option<i32>,
}

pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<UpdateUserRequest>,
) -> Result<Envelope<UserResponse>, CommunityError> {
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
        departments: state.department_repo(),
        passwords: state.passwords.clone(),
    };
    let user = usecase
        .execute(
            id,
            UpdateUserInput {
                name: body.name,
                password: body.password,
                comment: body.comment,
                grade: body.grade,
                class_num: body.class_num,
                profile_photo: body.profile_photo,
                department_id: body.department_id,
            },
        )
        .await?;
    Ok(Envelope::ok(user.into()))
}
