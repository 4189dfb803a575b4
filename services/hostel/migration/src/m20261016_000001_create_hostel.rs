use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hostel::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hostel::HostelId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hostel::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Hostel::Address).string_len(255).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hostel::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Hostel {
    Table,
    HostelId,
    Name,
    Address,
}
