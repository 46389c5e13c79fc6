use sea_orm::entity::prelude::*;

/// Registered platform member. `password_hash` holds an Argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub login_id: String,
    pub name: String,
    pub password_hash: String,
    pub comment: Option<String>,
    pub grade: Option<i32>,
    pub class_num: Option<i32>,
    pub profile_photo: Option<String>,
    pub school_id: i32,
    pub department_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    School,
    #[sea_orm(
        belongs_to = "super::school_departments::Entity",
        from = "Column::DepartmentId",
        to = "super::school_departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::map_comments::Entity")]
    MapComments,
    #[sea_orm(has_many = "super::keyword_users::Entity")]
    KeywordUsers,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::School.def()
    }
}

impl Related<super::school_departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::map_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapComments.def()
    }
}

impl Related<super::keywords::Entity> for Entity {
    fn to() -> RelationDef {
        super::keyword_users::Relation::Keyword.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::keyword_users::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
