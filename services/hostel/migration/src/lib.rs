use sea_orm_migration::prelude::*;

mod m20261016_000001_create_hostel;
mod m20261016_000002_create_room;
mod m20261016_000003_create_student;
mod m20261016_000004_create_staff;
mod m20261016_000005_create_fees;
mod m20261016_000006_create_attendance;
mod m20261016_000007_create_room_allocation;
mod m20261016_000008_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_hostel::Migration),
            Box::new(m20261016_000002_create_room::Migration),
            Box::new(m20261016_000003_create_student::Migration),
            Box::new(m20261016_000004_create_staff::Migration),
            Box::new(m20261016_000005_create_fees::Migration),
            Box::new(m20261016_000006_create_attendance::Migration),
            Box::new(m20261016_000007_create_room_allocation::Migration),
            Box::new(m20261016_000008_create_users::Migration),
        ]
    }
}
