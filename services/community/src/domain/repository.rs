#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Comment, Department, DepartmentEntry, Keyword, Map, Meal, NewDepartment, NewUser,
    ScheduleEvent, School, SchoolDetail, SchoolSummary, User, UserChanges,
};
use crate::error::CommunityError;

/// Repository for schools.
pub trait SchoolRepository: Send + Sync {
    /// Plain insert. No uniqueness check beyond the table constraint.
    async fn add(&self, name: &str, external_code: Option<&str>)
    -> Result<School, CommunityError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<School>, CommunityError>;

    async fn find_by_external_code(&self, code: &str) -> Result<Option<School>, CommunityError>;

    /// Schools whose name contains `fragment`, in insertion order.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<School>, CommunityError>;

    /// Insert-or-keep keyed on `external_code`. Returns the stored row and whether
    /// this call created it.
    async fn register(
        &self,
        name: &str,
        external_code: &str,
    ) -> Result<(School, bool), CommunityError>;
}

/// Repository for school departments.
pub trait DepartmentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, CommunityError>;

    async fn list_by_school(&self, school_id: i32) -> Result<Vec<Department>, CommunityError>;

    async fn find_by_school_and_name(
        &self,
        school_id: i32,
        name: &str,
    ) -> Result<Option<Department>, CommunityError>;

    /// Insert-or-keep keyed on `(school_id, name)`. Returns the stored row and
    /// whether this call created it.
    async fn register(
        &self,
        school_id: i32,
        department: &NewDepartment,
    ) -> Result<(Department, bool), CommunityError>;

    /// Insert every entry not already present. Returns the number of new rows.
    async fn register_many(
        &self,
        school_id: i32,
        departments: &[NewDepartment],
    ) -> Result<u64, CommunityError>;
}

/// Repository for users.
pub trait UserRepository: Send + Sync {
    /// Returns the new user's id. A taken `login_id` yields `UserAlreadyExists`.
    async fn create(&self, user: &NewUser) -> Result<i32, CommunityError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CommunityError>;

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, CommunityError>;

    async fn list_by_school(&self, school_id: i32) -> Result<Vec<User>, CommunityError>;

    /// Writes only the `Some` fields. Returns `true` if a row was affected;
    /// an empty change set issues no statement and returns `true`.
    async fn update(&self, id: i32, changes: &UserChanges) -> Result<bool, CommunityError>;
}

/// Repository for maps.
pub trait MapRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<Map, CommunityError>;

    async fn list(&self) -> Result<Vec<Map>, CommunityError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Map>, CommunityError>;
}

/// Repository for map comments.
pub trait CommentRepository: Send + Sync {
    async fn create(
        &self,
        user_id: i32,
        map_id: i32,
        content: &str,
    ) -> Result<Comment, CommunityError>;

    async fn list_by_map(&self, map_id: i32) -> Result<Vec<Comment>, CommunityError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, CommunityError>;

    /// Delete by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, CommunityError>;
}

/// Repository for keywords and the user–keyword association.
pub trait KeywordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Keyword>, CommunityError>;

    async fn find_by_word(&self, word: &str) -> Result<Option<Keyword>, CommunityError>;

    /// Find-or-create keyed on `word`.
    async fn register(&self, word: &str) -> Result<Keyword, CommunityError>;

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Keyword>, CommunityError>;

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Keyword>, CommunityError>;

    /// Atomically replace the user's keyword set with `keyword_ids`.
    /// On failure the previous set is left in place.
    async fn set_user_keywords(
        &self,
        user_id: i32,
        keyword_ids: &[i32],
    ) -> Result<(), CommunityError>;
}

/// Port for the third-party school directory (NEIS).
pub trait SchoolDirectoryPort: Send + Sync {
    async fn search_schools(&self, name: &str) -> Result<Vec<SchoolSummary>, CommunityError>;

    async fn school_detail(
        &self,
        office_code: &str,
        school_code: &str,
    ) -> Result<Option<SchoolDetail>, CommunityError>;

    async fn departments(
        &self,
        office_code: &str,
        school_code: &str,
    ) -> Result<Vec<DepartmentEntry>, CommunityError>;

    /// `date` is `YYYYMMDD`; `None` returns whatever the directory reports by default.
    async fn meals(
        &self,
        office_code: &str,
        school_code: &str,
        date: Option<&str>,
    ) -> Result<Vec<Meal>, CommunityError>;

    async fn schedules(
        &self,
        office_code: &str,
        school_code: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<ScheduleEvent>, CommunityError>;
}
