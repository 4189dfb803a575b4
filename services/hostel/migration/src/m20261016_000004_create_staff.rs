use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staff::StaffId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staff::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Staff::Designation).string_len(50).null())
                    .col(ColumnDef::new(Staff::Phone).string_len(20).null())
                    .col(ColumnDef::new(Staff::HostelId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staff::Table, Staff::HostelId)
                            .to(Hostel::Table, Hostel::HostelId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staff {
    Table,
    StaffId,
    Name,
    Designation,
    Phone,
    HostelId,
}

#[derive(Iden)]
enum Hostel {
    Table,
    HostelId,
}
