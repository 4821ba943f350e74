use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use crate::shared::errors::StoreError;

/// 지갑 서비스 에러
/// Wallet service errors
#[derive(Error, Debug)]
pub enum WalletError {
    /// username 또는 email 중복
    /// Username or email already taken
    #[error("Email or Username already in use")]
    Conflict,

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: u64 },

    /// 잘못된 요청 (형식, 페이지네이션 범위 등)
    /// Malformed request
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WalletError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::Conflict => StatusCode::CONFLICT,
            WalletError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            WalletError::Validation(_) => StatusCode::BAD_REQUEST,
            WalletError::DatabaseError(_) | WalletError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for WalletError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(_) => WalletError::Conflict,
            StoreError::OutOfRange(_) => WalletError::Validation(err.to_string()),
            StoreError::BalanceOverflow { .. } => WalletError::Internal(err.to_string()),
            StoreError::Database(msg) => WalletError::DatabaseError(msg),
        }
    }
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }

        (status, Json(json!({ "error": err.to_string() })))
    }
}

/// 핸들러 에러 응답 타입
/// Handler error response: status + `{"error": "..."}`
pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// axum extractor 거부(JSON 형식 오류, 잘못된 path/query)를 400 응답으로 변환
/// Turn an extractor rejection into a validation error response
pub fn rejection_to_api_error<R: std::fmt::Display>(rejection: R) -> ApiError {
    WalletError::Validation(rejection.to_string()).into()
}
