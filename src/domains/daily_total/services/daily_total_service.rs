use std::sync::Arc;
use crate::domains::daily_total::models::{DailyTotal, DayWindow};
use crate::shared::database::LedgerStore;
use crate::shared::errors::WalletError;
use crate::shared::utils::Clock;

pub const DEFAULT_DAILY_TOTALS_LIMIT: i64 = 30;
pub const MAX_DAILY_TOTALS_LIMIT: i64 = 1000;

/// 일일 거래 합계 서비스
/// Daily Transaction Total Service
///
/// 역할:
/// - 어제 하루(UTC) 동안의 거래 금액 합계 계산
/// - 결과를 daily_totals에 한 행 추가 (같은 날 재실행 시 중복 행 생김)
#[derive(Clone)]
pub struct DailyTotalService {
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn Clock>,
}

impl DailyTotalService {
    pub fn new(store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// 어제 합계 계산 및 저장
    /// Sum yesterday's transactions and append one DailyTotal
    pub async fn calculate_daily_totals(&self) -> Result<DailyTotal, WalletError> {
        let window = DayWindow::previous_day(self.clock.now());
        tracing::debug!(start = %window.start, end = %window.end, "daily transaction calculations started");

        let total_amount = self
            .store
            .sum_transactions_between(window.start, window.end)
            .await?;
        let daily_total = self
            .store
            .insert_daily_total(window.start, total_amount)
            .await?;

        tracing::info!(
            date = %daily_total.date,
            total_amount = %daily_total.total_amount,
            "daily transaction calculations finished"
        );
        Ok(daily_total)
    }

    /// 최근 일일 합계 조회
    /// Most recent daily totals, newest first
    pub async fn list_daily_totals(&self, limit: Option<i64>) -> Result<Vec<DailyTotal>, WalletError> {
        let limit = limit.unwrap_or(DEFAULT_DAILY_TOTALS_LIMIT);
        if !(1..=MAX_DAILY_TOTALS_LIMIT).contains(&limit) {
            return Err(WalletError::Validation(format!(
                "limit must be between 1 and {}: {}",
                MAX_DAILY_TOTALS_LIMIT, limit
            )));
        }

        Ok(self.store.list_daily_totals(limit).await?)
    }
}
