use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::domains::wallet::models::*;
use crate::domains::daily_total::models::*;
use crate::routes::{create_router, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::shared::services::AppState;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::wallet::handlers::user_handler::create_user,
        crate::domains::wallet::handlers::user_handler::get_balance,
        crate::domains::wallet::handlers::user_handler::get_user_details,
        crate::domains::wallet::handlers::user_handler::get_user_transactions,
        crate::domains::wallet::handlers::transaction_handler::process_transaction,
        crate::domains::daily_total::handlers::daily_total_handler::list_daily_totals
    ),
    components(schemas(
        User,
        UserDetails,
        CreateUserRequest,
        BalanceResponse,
        Transaction,
        TransactionResponse,
        UserTransactionsResponse,
        ProcessTransactionRequest,
        ProcessTransactionResponse,
        DailyTotal
    )),
    tags(
        (name = "Users", description = "User and balance endpoints"),
        (name = "Transactions", description = "Wallet transaction endpoints"),
        (name = "Daily Totals", description = "Daily transaction aggregates")
    ),
    info(
        title = "Wallet API Server",
        description = "Wallet microservice: users, balances, transactions and daily totals",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// 라우터 + Swagger UI 조합, state 주입
/// Build the complete application with docs and state
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .with_state(app_state)
}
