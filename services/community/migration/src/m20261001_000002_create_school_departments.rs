use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolDepartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolDepartments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SchoolDepartments::SchoolId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SchoolDepartments::Name).string().not_null())
                    .col(
                        ColumnDef::new(SchoolDepartments::ExternalCode)
                            .string()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SchoolDepartments::Table, SchoolDepartments::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ON CONFLICT target for department registration.
        manager
            .create_index(
                Index::create()
                    .table(SchoolDepartments::Table)
                    .col(SchoolDepartments::SchoolId)
                    .col(SchoolDepartments::Name)
                    .name("uq_school_departments_school_id_name")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolDepartments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SchoolDepartments {
    Table,
    Id,
    SchoolId,
    Name,
    ExternalCode,
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
}
