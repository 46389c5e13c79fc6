use sea_orm::{ConnectOptions, Database};
use tracing::info;

use campusmap_community::config::CommunityConfig;
use campusmap_community::infra::neis::NeisClient;
use campusmap_community::password::Passwords;
use campusmap_community::router::build_router;
use campusmap_community::state::AppState;
use campusmap_core::config::Config as _;

#[tokio::main]
async fn main() {
    campusmap_core::tracing::init_tracing();

    let config = CommunityConfig::from_env().expect("failed to load configuration");

    let mut options = ConnectOptions::new(&config.database_url);
    options
        .max_connections(config.database_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    let directory = NeisClient::new(
        &config.neis_api_url,
        &config.neis_api_key,
        &config.neis_school_kind,
    )
    .expect("failed to build NEIS client");

    let passwords = Passwords::with_default_params().expect("failed to initialize password hasher");

    let state = AppState {
        db,
        directory,
        passwords,
    };

    let router = build_router(state, &config.static_dir);
    let addr = format!("0.0.0.0:{}", config.community_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("community service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
