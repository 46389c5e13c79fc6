use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::map_comments::Entity")]
    MapComments,
}

impl Related<super::map_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapComments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
