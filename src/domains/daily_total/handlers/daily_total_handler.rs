use crate::domains::daily_total::models::{DailyTotal, DailyTotalsQuery};
use crate::shared::errors::{rejection_to_api_error, ApiError, WalletError};
use crate::shared::services::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

/// 일일 합계 목록 조회 핸들러
/// List daily totals handler (newest first)
#[utoipa::path(
    get,
    path = "/api/daily-totals",
    params(
        DailyTotalsQuery
    ),
    responses(
        (status = 200, description = "Daily totals retrieved successfully", body = Vec<DailyTotal>),
        (status = 400, description = "Invalid limit"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Daily Totals"
)]
pub async fn list_daily_totals(
    State(app_state): State<AppState>,
    query: Result<Query<DailyTotalsQuery>, QueryRejection>,
) -> Result<Json<Vec<DailyTotal>>, ApiError> {
    let Query(query) = query.map_err(rejection_to_api_error)?;

    let totals = app_state
        .daily_total_service
        .list_daily_totals(query.limit)
        .await
        .map_err(|e: WalletError| -> ApiError { e.into() })?;

    Ok(Json(totals))
}
