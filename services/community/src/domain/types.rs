use chrono::{DateTime, Utc};

/// A school registered on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    pub id: i32,
    pub name: String,
    /// NEIS office code and school code, e.g. `B10-7010123`.
    pub external_code: Option<String>,
}

/// A department (major) of a school.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub school_id: i32,
    pub name: String,
    pub external_code: Option<String>,
}

/// Input row for department registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub external_code: Option<String>,
}

/// A platform member. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub login_id: String,
    pub name: String,
    pub password_hash: String,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub school_id: i32,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login_id: String,
    pub name: String,
    pub password_hash: String,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub school_id: i32,
    pub department_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Partial user update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub department_id: Option<i32>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub map_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub id: i32,
    pub word: String,
}

// ── School directory records ────────────────────────────────────────────────

/// One school from a directory search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolSummary {
    pub school_code: String,
    pub school_name: String,
    pub office_code: String,
    pub office_name: String,
    pub school_type: String,
    pub address: String,
    pub found_date: String,
    pub zip_code: String,
}

/// Directory detail record for a single school.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolDetail {
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
    pub anniversary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub date: String,
    pub meal_type: String,
    /// Dish names joined with `", "`.
    pub dishes: String,
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub date: String,
    pub event_name: String,
    pub event_description: String,
}

/// Validate a login handle: alphanumeric + hyphen + underscore, 1-20 chars.
pub fn validate_login_id(login_id: &str) -> bool {
    if login_id.is_empty() || login_id.len() > 20 {
        return false;
    }
    login_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Drop repeated ids, keeping the first occurrence of each.
pub fn distinct_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Turn a NEIS dish string (`"밥<br/>국 (5.6.)<br/>"`) into `"밥, 국 (5.6.)"`.
pub fn normalize_dishes(raw: &str) -> String {
    raw.split("<br/>")
        .flat_map(|part| part.split("<br>"))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
