use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// 일일 거래 합계
/// Sum of all transaction amounts for one UTC day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DailyTotal)]
pub struct DailyTotal {
    pub id: u64,

    /// Start of the summarized day (00:00 UTC)
    pub date: DateTime<Utc>,

    #[schema(value_type = String, example = "250.00")]
    pub total_amount: Decimal,
}

/// 집계 구간 [start, end)
/// Half-open aggregation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// `now` 기준 어제 하루 (UTC)
    /// Yesterday relative to `now`: [yesterday 00:00, today 00:00)
    pub fn previous_day(now: DateTime<Utc>) -> Self {
        let end = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc())
            .unwrap_or(now);
        Self {
            start: end - Duration::days(1),
            end,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// 일일 합계 조회 쿼리
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailyTotalsQuery {
    /// 최대 조회 개수 (기본: 30, 최대: 1000)
    /// Limit (default: 30, max: 1000)
    #[param(example = 30)]
    #[serde(default)]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn previous_day_spans_yesterday_midnight_to_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 13, 45, 10).unwrap();
        let window = DayWindow::previous_day(now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn window_is_half_open() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let window = DayWindow::previous_day(now);
        assert!(window.contains(window.start));
        assert!(!window.contains(window.end));
        assert!(window.contains(window.end - Duration::nanoseconds(1)));
    }
}
