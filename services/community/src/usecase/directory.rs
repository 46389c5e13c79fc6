use crate::domain::repository::SchoolDirectoryPort;
use crate::domain::types::{DepartmentEntry, Meal, ScheduleEvent, SchoolDetail, SchoolSummary};
use crate::error::CommunityError;

/// NEIS codes identifying one school.
pub struct SchoolCodes {
    pub office_code: String,
    pub school_code: String,
}

impl SchoolCodes {
    fn validated(&self) -> Result<(&str, &str), CommunityError> {
        let office = self.office_code.trim();
        let school = self.school_code.trim();
        if office.is_empty() {
            return Err(CommunityError::MissingField("officeCode"));
        }
        if school.is_empty() {
            return Err(CommunityError::MissingField("schoolCode"));
        }
        Ok((office, school))
    }
}

// ── SearchDirectory ──────────────────────────────────────────────────────────

pub struct SearchDirectoryUseCase<P: SchoolDirectoryPort> {
    pub directory: P,
}

impl<P: SchoolDirectoryPort> SearchDirectoryUseCase<P> {
    pub async fn execute(&self, name: &str) -> Result<Vec<SchoolSummary>, CommunityError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommunityError::MissingField("name"));
        }
        self.directory.search_schools(name).await
    }
}

// ── GetDirectorySchool ───────────────────────────────────────────────────────

pub struct GetDirectorySchoolUseCase<P: SchoolDirectoryPort> {
    pub directory: P,
}

impl<P: SchoolDirectoryPort> GetDirectorySchoolUseCase<P> {
    pub async fn execute(&self, codes: &SchoolCodes) -> Result<SchoolDetail, CommunityError> {
        let (office, school) = codes.validated()?;
        self.directory
            .school_detail(office, school)
            .await?
            .ok_or(CommunityError::DirectoryRecordNotFound)
    }
}

// ── ListDirectoryDepartments ─────────────────────────────────────────────────

pub struct ListDirectoryDepartmentsUseCase<P: SchoolDirectoryPort> {
    pub directory: P,
}

impl<P: SchoolDirectoryPort> ListDirectoryDepartmentsUseCase<P> {
    pub async fn execute(
        &self,
        codes: &SchoolCodes,
    ) -> Result<Vec<DepartmentEntry>, CommunityError> {
        let (office, school) = codes.validated()?;
        self.directory.departments(office, school).await
    }
}

// ── ListMeals ────────────────────────────────────────────────────────────────

pub struct ListMealsUseCase<P: SchoolDirectoryPort> {
    pub directory: P,
}

impl<P: SchoolDirectoryPort> ListMealsUseCase<P> {
    pub async fn execute(
        &self,
        codes: &SchoolCodes,
        date: Option<&str>,
    ) -> Result<Vec<Meal>, CommunityError> {
        let (office, school) = codes.validated()?;
        let date = checked_ymd(date, "date")?;
        self.directory.meals(office, school, date).await
    }
}

// ── ListSchedules ────────────────────────────────────────────────────────────

pub struct ListSchedulesUseCase<P: SchoolDirectoryPort> {
    pub directory: P,
}

impl<P: SchoolDirectoryPort> ListSchedulesUseCase<P> {
    pub async fn execute(
        &self,
        codes: &SchoolCodes,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<ScheduleEvent>, CommunityError> {
        let (office, school) = codes.validated()?;
        let from = checked_ymd(from, "from")?;
        let to = checked_ymd(to, "to")?;
        self.directory.schedules(office, school, from, to).await
    }
}

/// Blank is treated as absent; anything else must be eight digits (`YYYYMMDD`).
fn checked_ymd<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<Option<&'a str>, CommunityError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) if v.len() == 8 && v.bytes().all(|b| b.is_ascii_digit()) => Ok(Some(v)),
        Some(_) => Err(CommunityError::InvalidField(field)),
    }
}
