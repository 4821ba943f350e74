// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{response::Redirect, routing::get, Json, Router};
use serde_json::{json, Value};
use crate::shared::services::AppState;

use crate::domains::wallet::routes::{create_transactions_router, create_users_router};
use crate::domains::daily_total::routes::create_daily_totals_router;

/// Swagger UI 경로
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
/// OpenAPI 문서 경로
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(redirect_to_docs))
        .route("/health", get(health))
        .nest("/api/users", create_users_router())
        .nest("/api/transactions", create_transactions_router())
        .nest("/api/daily-totals", create_daily_totals_router())
}

// 루트 URL → Swagger 문서
async fn redirect_to_docs() -> Redirect {
    Redirect::temporary(SWAGGER_UI_PATH)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
