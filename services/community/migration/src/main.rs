use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(campusmap_community_migration::Migrator).await;
}
