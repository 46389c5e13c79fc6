use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeywordUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(KeywordUsers::UserId).integer().not_null())
                    .col(ColumnDef::new(KeywordUsers::KeywordId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(KeywordUsers::UserId)
                            .col(KeywordUsers::KeywordId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(KeywordUsers::Table, KeywordUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(KeywordUsers::Table, KeywordUsers::KeywordId)
                            .to(Keywords::Table, Keywords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KeywordUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum KeywordUsers {
    Table,
    UserId,
    KeywordId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Keywords {
    Table,
    Id,
}
