use crate::domain::repository::{SchoolRepository, UserRepository};
use crate::domain::types::{School, User};
use crate::error::CommunityError;

// ── GetSchool ────────────────────────────────────────────────────────────────

pub struct GetSchoolUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> GetSchoolUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<School, CommunityError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::SchoolNotFound)
    }
}

// ── SearchSchools ────────────────────────────────────────────────────────────

pub struct SearchSchoolsUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> SearchSchoolsUseCase<R> {
    pub async fn execute(&self, fragment: &str) -> Result<Vec<School>, CommunityError> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(CommunityError::MissingField("name"));
        }
        self.repo.search_by_name(fragment).await
    }
}

// ── RegisterSchool ───────────────────────────────────────────────────────────

pub struct RegisterSchoolInput {
    pub name: String,
    pub external_code: Option<String>,
}

pub struct RegisterSchoolUseCase<R: SchoolRepository> {
    pub repo: R,
}

impl<R: SchoolRepository> RegisterSchoolUseCase<R> {
    /// Returns the stored school and whether this call created it.
    pub async fn execute(
        &self,
        input: RegisterSchoolInput,
    ) -> Result<(School, bool), CommunityError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CommunityError::MissingField("name"));
        }
        let code = input
            .external_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or(CommunityError::MissingField("externalId"))?;
        self.repo.register(name, code).await
    }
}

// ── ListSchoolUsers ──────────────────────────────────────────────────────────

pub struct ListSchoolUsersUseCase<S: SchoolRepository, U: UserRepository> {
    pub schools: S,
    pub users: U,
}

impl<S: SchoolRepository, U: UserRepository> ListSchoolUsersUseCase<S, U> {
    pub async fn execute(&self, school_id: i32) -> Result<Vec<User>, CommunityError> {
        if self.schools.find_by_id(school_id).await?.is_none() {
            return Err(CommunityError::SchoolNotFound);
        }
        self.users.list_by_school(school_id).await
    }
}
