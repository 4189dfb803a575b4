use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fees::FeeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fees::StudentId).integer().not_null())
                    .col(ColumnDef::new(Fees::Amount).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Fees::PaymentDate).date().null())
                    .col(
                        ColumnDef::new(Fees::PaymentStatus)
                            .string_len(20)
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(ColumnDef::new(Fees::FeeType).string_len(20).null())
                    .col(ColumnDef::new(Fees::Period).string_len(20).null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Fees::Table, Fees::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Fees::Table)
                    .col(Fees::StudentId)
                    .name("idx_fees_student_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Fees {
    Table,
    FeeId,
    StudentId,
    Amount,
    PaymentDate,
    PaymentStatus,
    FeeType,
    Period,
}

#[derive(Iden)]
enum Student {
    Table,
    StudentId,
}
