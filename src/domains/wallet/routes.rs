// Wallet domain routes
// 지갑 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::wallet::handlers::{transaction_handler, user_handler};
use crate::shared::services::AppState;

/// Create users router
/// 사용자 라우터 생성
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(user_handler::create_user))
        .route("/balance/:user_id", get(user_handler::get_balance))
        .route("/details/:user_id", get(user_handler::get_user_details))
        .route("/transactions/:user_id", get(user_handler::get_user_transactions))
}

/// Create transactions router
/// 거래 라우터 생성
pub fn create_transactions_router() -> Router<AppState> {
    Router::new()
        .route("/money", post(transaction_handler::process_transaction))
}
