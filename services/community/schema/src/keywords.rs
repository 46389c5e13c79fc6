use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "keywords")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub word: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::keyword_users::Entity")]
    KeywordUsers,
}

impl Related<super::keyword_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KeywordUsers.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::keyword_users::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::keyword_users::Relation::Keyword.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
