use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::StudentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Student::StudentCode)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Student::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Student::Email).string_len(255).null())
                    .col(ColumnDef::new(Student::Phone).string_len(20).null())
                    .col(ColumnDef::new(Student::Gender).string_len(10).null())
                    .col(ColumnDef::new(Student::Address).string_len(255).null())
                    .col(ColumnDef::new(Student::Course).string_len(100).null())
                    .col(ColumnDef::new(Student::Year).integer().null())
                    .col(ColumnDef::new(Student::GuardianName).string_len(100).null())
                    .col(ColumnDef::new(Student::GuardianPhone).string_len(20).null())
                    .col(ColumnDef::new(Student::RoomId).integer().null())
                    .col(
                        ColumnDef::new(Student::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Student::Table, Student::RoomId)
                            .to(Room::Table, Room::RoomId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        // Occupancy is COUNT(*) over this column.
        manager
            .create_index(
                Index::create()
                    .table(Student::Table)
                    .col(Student::RoomId)
                    .name("idx_student_room_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Student {
    Table,
    StudentId,
    StudentCode,
    Name,
    Email,
    Phone,
    Gender,
    Address,
    Course,
    Year,
    GuardianName,
    GuardianPhone,
    RoomId,
    CreatedAt,
}

#[derive(Iden)]
enum Room {
    Table,
    RoomId,
}
