use crate::domains::wallet::models::{ProcessTransactionRequest, ProcessTransactionResponse};
use crate::shared::errors::{rejection_to_api_error, ApiError, WalletError};
use crate::shared::services::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

/// 거래 처리 핸들러 (입금/출금)
/// Process transaction handler
///
/// amount가 음수면 출금. 잔고 하한 검사 없음.
/// Negative amounts are deductions; overdrafts are allowed.
#[utoipa::path(
    post,
    path = "/api/transactions/money",
    request_body = ProcessTransactionRequest,
    responses(
        (status = 200, description = "Transaction processed", body = ProcessTransactionResponse),
        (status = 400, description = "Malformed request"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transactions"
)]
pub async fn process_transaction(
    State(app_state): State<AppState>,
    payload: Result<Json<ProcessTransactionRequest>, JsonRejection>,
) -> Result<Json<ProcessTransactionResponse>, ApiError> {
    let Json(request) = payload.map_err(rejection_to_api_error)?;
    let request = request.validate().map_err(ApiError::from)?;

    let response = app_state
        .wallet_state
        .wallet_service
        .process_transaction(request.user_id, request.amount)
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok(Json(response))
}
