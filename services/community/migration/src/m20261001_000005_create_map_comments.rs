use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MapComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MapComments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MapComments::UserId).integer().not_null())
                    .col(ColumnDef::new(MapComments::MapId).integer().not_null())
                    .col(ColumnDef::new(MapComments::Content).text().not_null())
                    .col(
                        ColumnDef::new(MapComments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MapComments::Table, MapComments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MapComments::Table, MapComments::MapId)
                            .to(Maps::Table, Maps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(MapComments::Table)
                    .col(MapComments::MapId)
                    .name("idx_map_comments_map_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MapComments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MapComments {
    Table,
    Id,
    UserId,
    MapId,
    Content,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Maps {
    Table,
    Id,
}
