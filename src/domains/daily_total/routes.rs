// Daily total domain routes
use axum::{routing::get, Router};
use crate::domains::daily_total::handlers::daily_total_handler;
use crate::shared::services::AppState;

/// Create daily totals router
/// 일일 합계 라우터 생성
pub fn create_daily_totals_router() -> Router<AppState> {
    Router::new()
        .route("/", get(daily_total_handler::list_daily_totals))
}
