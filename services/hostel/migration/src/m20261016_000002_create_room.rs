use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Room::RoomId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Room::RoomNo)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Room::RoomType).string_len(20).null())
                    .col(ColumnDef::new(Room::Capacity).integer().null())
                    .col(ColumnDef::new(Room::HostelId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Room::Table, Room::HostelId)
                            .to(Hostel::Table, Hostel::HostelId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Room {
    Table,
    RoomId,
    RoomNo,
    RoomType,
    Capacity,
    HostelId,
}

#[derive(Iden)]
enum Hostel {
    Table,
    HostelId,
}
