use crate::domains::wallet::models::{
    BalanceResponse, CreateUserRequest, TransactionsQuery, User, UserDetails, UserField,
    UserTransactionsResponse,
};
use crate::shared::errors::{rejection_to_api_error, ApiError, WalletError};
use crate::shared::services::AppState;
use crate::shared::utils::Pagination;
use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// 사용자 상세 조회 쿼리 파라미터
/// Query parameters for user details
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserDetailsQuery {
    /// 쉼표로 구분된 필드 목록 (id, username, email, balance)
    /// Comma-separated list of fields to return
    #[param(example = "id,username,balance")]
    #[serde(default)]
    pub fields: Option<String>,
}

/// 사용자 생성 핸들러
/// Create user handler
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Malformed request"),
        (status = 409, description = "Email or Username already in use"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(request) = payload.map_err(rejection_to_api_error)?;
    let request = request.validate().map_err(ApiError::from)?;

    let user = app_state
        .wallet_state
        .wallet_service
        .create_user(&request.username, &request.email)
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// 잔고 조회 핸들러
/// Get balance handler
#[utoipa::path(
    get,
    path = "/api/users/balance/{userId}",
    params(
        ("userId" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_balance(
    State(app_state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let Path(user_id) = user_id.map_err(rejection_to_api_error)?;

    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance_by_id(user_id)
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok(Json(balance))
}

/// 사용자 상세 조회 핸들러 (필드 선택)
/// Get user details handler
///
/// fields 미지정 시 id, username, email, balance 반환
#[utoipa::path(
    get,
    path = "/api/users/details/{userId}",
    params(
        ("userId" = u64, Path, description = "User ID"),
        UserDetailsQuery
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserDetails),
        (status = 400, description = "Unknown field requested"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user_details(
    State(app_state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
    query: Result<Query<UserDetailsQuery>, QueryRejection>,
) -> Result<Json<UserDetails>, ApiError> {
    let Path(user_id) = user_id.map_err(rejection_to_api_error)?;
    let Query(query) = query.map_err(rejection_to_api_error)?;

    let fields = query
        .fields
        .as_deref()
        .map(UserField::parse_list)
        .transpose()
        .map_err(ApiError::from)?;

    let details = app_state
        .wallet_state
        .wallet_service
        .get_user_by_id(user_id, fields.as_deref())
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok(Json(details))
}

/// 사용자 거래 내역 조회 핸들러
/// Get user transactions handler
///
/// # Query Parameters
/// - page: 페이지 번호 (optional, 기본: 1)
/// - limit: 페이지 크기 (optional, 기본: 10, 최대: 1000)
///
/// 최신 거래부터 정렬, total은 전체 거래 수
#[utoipa::path(
    get,
    path = "/api/users/transactions/{userId}",
    params(
        ("userId" = u64, Path, description = "User ID"),
        TransactionsQuery
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = UserTransactionsResponse),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user_transactions(
    State(app_state): State<AppState>,
    user_id: Result<Path<u64>, PathRejection>,
    query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<UserTransactionsResponse>, ApiError> {
    let Path(user_id) = user_id.map_err(rejection_to_api_error)?;
    let Query(query) = query.map_err(rejection_to_api_error)?;
    let pagination = Pagination::new(query.page, query.limit).map_err(ApiError::from)?;

    let transactions = app_state
        .wallet_state
        .wallet_service
        .get_user_transactions(user_id, pagination)
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok(Json(transactions))
}
