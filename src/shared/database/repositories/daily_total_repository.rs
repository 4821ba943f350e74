use sqlx::{PgPool, Row};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::domains::daily_total::models::DailyTotal;
use crate::shared::errors::StoreResult;

pub struct DailyTotalRepository {
    pool: PgPool,
}

impl DailyTotalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, date: DateTime<Utc>, total_amount: Decimal) -> StoreResult<DailyTotal> {
        let row = sqlx::query(
            r#"
            INSERT INTO daily_totals (date, total_amount)
            VALUES ($1, $2)
            RETURNING id, date, total_amount
            "#,
        )
        .bind(date)
        .bind(total_amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_daily_total(&row))
    }

    /// 최근 일일 합계 조회
    /// Get most recent daily totals
    pub async fn get_recent(&self, limit: i64) -> StoreResult<Vec<DailyTotal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, total_amount
            FROM daily_totals
            ORDER BY date DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_daily_total).collect())
    }

    fn row_to_daily_total(row: &sqlx::postgres::PgRow) -> DailyTotal {
        DailyTotal {
            id: row.get::<i64, _>("id") as u64,
            date: row.get("date"),
            total_amount: row.get("total_amount"),
        }
    }
}
