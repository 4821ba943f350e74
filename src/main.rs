use std::sync::Arc;
use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use wallet_service::domains::daily_total::services::DailyTotalSchedule;
use wallet_service::openapi::build_app;
use wallet_service::routes::SWAGGER_UI_PATH;
use wallet_service::shared::database::{Database, LedgerStore, MemoryLedgerStore, PgLedgerStore};
use wallet_service::shared::services::AppState;
use wallet_service::shared::settings::{Settings, StoreKind};

#[tokio::main]
async fn main() -> Result<()> {
    // 설정 로드 (기본값 < wallet.toml < 환경 변수)
    let settings = Settings::load()?;

    // 로깅: RUST_LOG가 있으면 우선, 없으면 LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "wallet_service={level},tower_http={level}",
                level = settings.log_level
            ))
        });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 저장소 생성
    let store: Arc<dyn LedgerStore> = match settings.store {
        StoreKind::Postgres => {
            let db = Database::from_settings(&settings).await?;
            db.initialize().await?;
            tracing::info!(
                host = %settings.database_host,
                database = %settings.database_name,
                "connected to PostgreSQL"
            );
            Arc::new(PgLedgerStore::new(db))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory ledger store; data is lost on shutdown");
            Arc::new(MemoryLedgerStore::new())
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let schedule = DailyTotalSchedule::from_interval_secs(settings.daily_total_interval_secs);
    let app_state = AppState::new(store, schedule);

    // 일일 합계 스케줄러 시작 (요청 처리와 독립된 태스크)
    if settings.daily_total_enabled {
        app_state.daily_total_scheduler.start();
    } else {
        tracing::info!("daily total scheduler disabled by configuration");
    }

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);
    let cors = match settings.cors_origin.as_deref() {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS_ORIGIN: {}", origin))?,
        ),
        None => cors.allow_origin(Any),
    };

    let app = build_app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}{}", addr, SWAGGER_UI_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
