use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAllocation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomAllocation::AllocationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RoomAllocation::StudentId).integer().not_null())
                    .col(ColumnDef::new(RoomAllocation::RoomId).integer().not_null())
                    .col(ColumnDef::new(RoomAllocation::AllocationDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomAllocation::Table, RoomAllocation::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RoomAllocation::Table, RoomAllocation::RoomId)
                            .to(Room::Table, Room::RoomId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAllocation::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RoomAllocation {
    Table,
    AllocationId,
    StudentId,
    RoomId,
    AllocationDate,
}

#[derive(Iden)]
enum Student {
    Table,
    StudentId,
}

#[derive(Iden)]
enum Room {
    Table,
    RoomId,
}
