use crate::domain::repository::{DepartmentRepository, SchoolRepository};
use crate::domain::types::{Department, NewDepartment};
use crate::error::CommunityError;

// ── GetDepartment ────────────────────────────────────────────────────────────

pub struct GetDepartmentUseCase<R: DepartmentRepository> {
    pub repo: R,
}

impl<R: DepartmentRepository> GetDepartmentUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Department, CommunityError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::DepartmentNotFound)
    }
}

// ── ListDepartments ──────────────────────────────────────────────────────────

pub struct ListDepartmentsUseCase<S: SchoolRepository, D: DepartmentRepository> {
    pub schools: S,
    pub departments: D,
}

impl<S: SchoolRepository, D: DepartmentRepository> ListDepartmentsUseCase<S, D> {
    pub async fn execute(&self, school_id: i32) -> Result<Vec<Department>, CommunityError> {
        ensure_school(&self.schools, school_id).await?;
        self.departments.list_by_school(school_id).await
    }
}

// ── RegisterDepartment ───────────────────────────────────────────────────────

pub struct RegisterDepartmentUseCase<S: SchoolRepository, D: DepartmentRepository> {
    pub schools: S,
    pub departments: D,
}

impl<S: SchoolRepository, D: DepartmentRepository> RegisterDepartmentUseCase<S, D> {
    /// Returns the stored department and whether this call created it.
    pub async fn execute(
        &self,
        school_id: i32,
        department: NewDepartment,
    ) -> Result<(Department, bool), CommunityError> {
        let department = normalize(department).ok_or(CommunityError::MissingField("name"))?;
        ensure_school(&self.schools, school_id).await?;
        self.departments.register(school_id, &department).await
    }
}

// ── RegisterDepartments (bulk) ───────────────────────────────────────────────

pub struct RegisterDepartmentsUseCase<S: SchoolRepository, D: DepartmentRepository> {
    pub schools: S,
    pub departments: D,
}

impl<S: SchoolRepository, D: DepartmentRepository> RegisterDepartmentsUseCase<S, D> {
    /// Returns how many of `departments` were new.
    pub async fn execute(
        &self,
        school_id: i32,
        departments: Vec<NewDepartment>,
    ) -> Result<u64, CommunityError> {
        let departments = departments
            .into_iter()
            .map(normalize)
            .collect::<Option<Vec<_>>>()
            .ok_or(CommunityError::MissingField("name"))?;
        ensure_school(&self.schools, school_id).await?;
        self.departments
            .register_many(school_id, &departments)
            .await
    }
}

async fn ensure_school<S: SchoolRepository>(
    schools: &S,
    school_id: i32,
) -> Result<(), CommunityError> {
    match schools.find_by_id(school_id).await? {
        Some(_) => Ok(()),
        None => Err(CommunityError::SchoolNotFound),
    }
}

/// Trim the name and external code; `None` when the name is blank.
fn normalize(department: NewDepartment) -> Option<NewDepartment> {
    let name = department.name.trim();
    if name.is_empty() {
        return None;
    }
    Some(NewDepartment {
        name: name.to_owned(),
        external_code: department
            .external_code
            .map(|code| code.trim().to_owned())
            .filter(|code| !code.is_empty()),
    })
}
