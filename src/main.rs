// region:    --- Imports
use anyhow::Context;
use auction_catalog::config::Config;
use auction_catalog::database::DatabaseManager;
use auction_catalog::handlers;
use auction_catalog::seed;
use auction_catalog::store::{AuctionStore, PostgresAuctionStore};
use axum::extract::DefaultBodyLimit;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 로드
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("DATABASE_URL must be set")?;

    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .without_time()
        .with_target(false)
        .init();

    // DatabaseManager 생성
    let db_manager = Arc::new(
        DatabaseManager::new(&config)
            .await
            .context("Failed to create pool")?,
    );

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    let store: Arc<dyn AuctionStore> = Arc::new(PostgresAuctionStore::new(db_manager));

    // 초기 데이터 등록 (실패 시 서버를 시작하지 않음)
    if let Err(e) = seed::seed_auctions(store.as_ref()).await {
        error!("{:<12} --> 초기 데이터 등록 실패: {:?}", "Main", e);
        return Err(e.into());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::routes(store)
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let listener = TcpListener::bind(("0.0.0.0", config.server_port)).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
        return Err(err.into());
    }
    Ok(())
}
// endregion: --- Main
