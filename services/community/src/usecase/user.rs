use chrono::Utc;

use crate::domain::repository::{DepartmentRepository, SchoolRepository, UserRepository};
use crate::domain::types::{NewUser, User, UserChanges, validate_login_id};
use crate::error::CommunityError;
use crate::password::Passwords;

// ── CheckLoginId ─────────────────────────────────────────────────────────────

pub struct CheckLoginIdUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> CheckLoginIdUseCase<U> {
    /// `true` when no user holds `login_id`.
    pub async fn execute(&self, login_id: &str) -> Result<bool, CommunityError> {
        if !validate_login_id(login_id) {
            return Err(CommunityError::InvalidHandle);
        }
        Ok(self.repo.find_by_login_id(login_id).await?.is_none())
    }
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub login_id: String,
    pub name: String,
    pub password: String,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub school_id: i32,
    pub department_id: Option<i32>,
}

pub struct RegisterUserUseCase<U: UserRepository, S: SchoolRepository, D: DepartmentRepository> {
    pub users: U,
    pub schools: S,
    pub departments: D,
    pub passwords: Passwords,
}

impl<U: UserRepository, S: SchoolRepository, D: DepartmentRepository>
    RegisterUserUseCase<U, S, D>
{
    /// Returns the new user's id.
    pub async fn execute(&self, input: RegisterUserInput) -> Result<i32, CommunityError> {
        if !validate_login_id(&input.login_id) {
            return Err(CommunityError::InvalidHandle);
        }
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CommunityError::MissingField("name"));
        }
        if input.password.is_empty() {
            return Err(CommunityError::MissingField("password"));
        }
        if self.schools.find_by_id(input.school_id).await?.is_none() {
            return Err(CommunityError::SchoolNotFound);
        }
        if let Some(department_id) = input.department_id {
            ensure_department_of(&self.departments, department_id, input.school_id).await?;
        }

        let password_hash = self.passwords.hash_blocking(input.password).await?;
        let user = NewUser {
            login_id: input.login_id,
            name: name.to_owned(),
            password_hash,
            comment: input.comment,
            grade: input.grade,
            class_num: input.class_num,
            profile_photo: input.profile_photo,
            school_id: input.school_id,
            department_id: input.department_id,
            created_at: Utc::now(),
        };
        let id = self.users.create(&user).await?;
        tracing::info!(user_id = id, school_id = user.school_id, "user registered");
        Ok(id)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<U: UserRepository> {
    pub repo: U,
    pub passwords: Passwords,
}

impl<U: UserRepository> LoginUseCase<U> {
    /// Unknown handle and wrong password are the same `InvalidCredentials`.
    pub async fn execute(&self, login_id: &str, password: String) -> Result<User, CommunityError> {
        if login_id.is_empty() {
            return Err(CommunityError::MissingField("idname"));
        }
        if password.is_empty() {
            return Err(CommunityError::MissingField("password"));
        }
        let user = self.repo.find_by_login_id(login_id).await?;
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let matched = self.passwords.verify_blocking(password, stored_hash).await?;
        match user {
            Some(user) if matched => Ok(user),
            _ => Err(CommunityError::InvalidCredentials),
        }
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub repo: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, id: i32) -> Result<User, CommunityError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub password: Option<String>,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub department_id: Option<i32>,
}

pub struct UpdateUserUseCase<U: UserRepository, D: DepartmentRepository> {
    pub users: U,
    pub departments: D,
    pub passwords: Passwords,
}

impl<U: UserRepository, D: DepartmentRepository> UpdateUserUseCase<U, D> {
    /// Applies the given fields and returns the user as stored afterwards.
    pub async fn execute(&self, id: i32, input: UpdateUserInput) -> Result<User, CommunityError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::UserNotFound)?;

        let name = match input.name {
            Some(name) if name.trim().is_empty() => {
                return Err(CommunityError::InvalidField("name"));
            }
            Some(name) => Some(name.trim().to_owned()),
            None => None,
        };
        if let Some(department_id) = input.department_id {
            ensure_department_of(&self.departments, department_id, user.school_id).await?;
        }
        let password_hash = match input.password {
            Some(password) if password.is_empty() => {
                return Err(CommunityError::InvalidField("password"));
            }
            Some(password) => Some(self.passwords.hash_blocking(password).await?),
            None => None,
        };

        let changes = UserChanges {
            name,
            password_hash,
            comment: input.comment,
            grade: input.grade,
            class_num: input.class_num,
            profile_photo: input.profile_photo,
            department_id: input.department_id,
        };
        if changes.is_empty() {
            return Ok(user);
        }
        if !self.users.update(id, &changes).await? {
            return Err(CommunityError::UserNotFound);
        }
        self.users
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::UserNotFound)
    }
}

/// The department must exist and belong to `school_id`.
async fn ensure_department_of<D: DepartmentRepository>(
    departments: &D,
    department_id: i32,
    school_id: i32,
) -> Result<(), CommunityError> {
    match departments.find_by_id(department_id).await? {
        Some(department) if department.school_id == school_id => Ok(()),
        Some(_) => Err(CommunityError::InvalidField("departmentId")),
        None => Err(CommunityError::DepartmentNotFound),
    }
}
