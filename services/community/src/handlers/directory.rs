//! Proxies to the NEIS school directory. Records are passed through after
//! normalization; nothing here touches the database.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::{DepartmentEntry, Meal, ScheduleEvent, SchoolDetail, SchoolSummary};
use crate::error::CommunityError;
use crate::handlers::ApiQuery;
use crate::state::AppState;
use crate::usecase::directory::{
    GetDirectorySchoolUseCase, ListDirectoryDepartmentsUseCase, ListMealsUseCase,
    ListSchedulesUseCase, SchoolCodes, SearchDirectoryUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSummaryResponse {
    pub school_code: String,
    pub school_name: String,
    pub office_code: String,
    pub office_name: String,
    pub school_type: String,
    pub address: String,
    pub found_date: String,
    pub zip_code: String,
}

impl From<SchoolSummary> for SchoolSummaryResponse {
    fn from(s: SchoolSummary) -> Self {
        Self {
            school_code: s.school_code,
            school_name: s.school_name,
            office_code: s.office_code,
            office_name: s.office_name,
            school_type: s.school_type,
            address: s.address,
            found_date: s.found_date,
            zip_code: s.zip_code,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDetailResponse {
    pub school_code: String,
    pub school_name: String,
    pub office_code: String,
    pub office_name: String,
    pub english_name: String,
    pub school_type: String,
    pub address: String,
    pub zip_code: String,
    pub phone: String,
    pub website: String,
    pub found_date: String,
    pub school_anniversary: String,
}

impl From<SchoolDetail> for SchoolDetailResponse {
    fn from(d: SchoolDetail) -> Self {
        Self {
            school_code: d.school_code,
            school_name: d.school_name,
            office_code: d.office_code,
            office_name: d.office_name,
            english_name: d.english_name,
            school_type: d.school_type,
            address: d.address,
            zip_code: d.zip_code,
            phone: d.phone,
            website: d.website,
            found_date: d.found_date,
            school_anniversary: d.anniversary,
        }
    }
}

#[derive(Serialize)]
pub struct DirectoryDepartmentResponse {
    pub name: String,
}

impl From<DepartmentEntry> for DirectoryDepartmentResponse {
    fn from(entry: DepartmentEntry) -> Self {
        Self { name: entry.name }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealResponse {
    pub date: String,
    pub meal_type: String,
    pub dishes: String,
    pub calories: String,
}

impl From<Meal> for MealResponse {
    fn from(meal: Meal) -> Self {
        Self {
            date: meal.date,
            meal_type: meal.meal_type,
            dishes: meal.dishes,
            calories: meal.calories,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventResponse {
    pub date: String,
    pub event_name: String,
    pub event_description: String,
}

impl From<ScheduleEvent> for ScheduleEventResponse {
    fn from(event: ScheduleEvent) -> Self {
        Self {
            date: event.date,
            event_name: event.event_name,
            event_description: event.event_description,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodesQuery {
    pub office_code: Option<String>,
    pub school_code: Option<String>,
}

impl CodesQuery {
    fn into_codes(self) -> SchoolCodes {
        SchoolCodes {
            office_code: self.office_code.unwrap_or_default(),
            school_code: self.school_code.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealQuery {
    pub office_code: Option<String>,
    pub school_code: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQuery {
    pub office_code: Option<String>,
    pub school_code: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

// ── GET /api/schools/search ──────────────────────────────────────────────────

pub async fn search_directory(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Envelope<Vec<SchoolSummaryResponse>>, CommunityError> {
    let usecase = SearchDirectoryUseCase {
        directory: state.directory.clone(),
    };
    let schools = usecase
        .execute(query.name.as_deref().unwrap_or_default())
        .await?;
    Ok(Envelope::ok(schools.into_iter().map(Into::into).collect()))
}

// ── GET /api/schools/detail ──────────────────────────────────────────────────

pub async fn directory_detail(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CodesQuery>,
) -> Result<Envelope<SchoolDetailResponse>, CommunityError> {
    let usecase = GetDirectorySchoolUseCase {
        directory: state.directory.clone(),
    };
    let detail = usecase.execute(&query.into_codes()).await?;
    Ok(Envelope::ok(detail.into()))
}

// ── GET /api/schools/departments ─────────────────────────────────────────────

pub async fn directory_departments(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CodesQuery>,
) -> Result<Envelope<Vec<DirectoryDepartmentResponse>>, CommunityError> {
    let usecase = ListDirectoryDepartmentsUseCase {
        directory: state.directory.clone(),
    };
    let departments = usecase.execute(&query.into_codes()).await?;
    Ok(Envelope::ok(
        departments.into_iter().map(Into::into).collect(),
    ))
}

// ── GET /api/schools/meals ───────────────────────────────────────────────────

pub async fn directory_meals(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MealQuery>,
) -> Result<Envelope<Vec<MealResponse>>, CommunityError> {
    let codes = SchoolCodes {
        office_code: query.office_code.unwrap_or_default(),
        school_code: query.school_code.unwrap_or_default(),
    };
    let usecase = ListMealsUseCase {
        directory: state.directory.clone(),
    };
    let meals = usecase.execute(&codes, query.date.as_deref()).await?;
    Ok(Envelope::ok(meals.into_iter().map(Into::into).collect()))
}

// ── GET /api/schools/schedules ───────────────────────────────────────────────

pub async fn directory_schedules(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ScheduleQuery>,
) -> Result<Envelope<Vec<ScheduleEventResponse>>, CommunityError> {
    let codes = SchoolCodes {
        office_code: query.office_code.unwrap_or_default(),
        school_code: query.school_code.unwrap_or_default(),
    };
    let usecase = ListSchedulesUseCase {
        directory: state.directory.clone(),
    };
    let events = usecase
        .execute(&codes, query.from.as_deref(), query.to.as_deref())
        .await?;
    Ok(Envelope::ok(events.into_iter().map(Into::into).collect()))
}
