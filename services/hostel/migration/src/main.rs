use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(hostel_migration::Migrator).await;
}
