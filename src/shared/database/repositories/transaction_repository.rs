use sqlx::{PgPool, Row};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::domains::wallet::models::{fits_ledger_column, next_balance, Transaction};
use crate::shared::errors::{StoreError, StoreResult};

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 잔고 갱신 + 거래 생성 (하나의 DB 트랜잭션)
    /// Update balance and append a ledger entry in one DB transaction
    ///
    /// 처리 흐름:
    /// 1. 사용자 행 잠금 (SELECT ... FOR UPDATE)
    /// 2. 새 잔고 계산 (decimal)
    /// 3. 잔고 저장
    /// 4. 거래 INSERT
    /// 5. COMMIT (중간 실패 시 전체 롤백)
    pub async fn apply_to_balance(&self, user_id: u64, amount: Decimal) -> StoreResult<Option<Transaction>> {
        if !fits_ledger_column(amount) {
            return Err(StoreError::OutOfRange(format!("amount {}", amount)));
        }

        let mut tx = self.pool.begin().await?;

        let balance: Option<Decimal> = sqlx::query_scalar(
            r#"
            SELECT balance FROM users WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(user_id as i64)
        .fetch_optional(&mut *tx)
        .await?;

        let balance = match balance {
            Some(b) => b,
            None => {
                tx.rollback().await?;
                return Ok(None);
            }
        };

        let new_balance = next_balance(balance, amount).ok_or(StoreError::BalanceOverflow { user_id })?;

        sqlx::query(
            r#"
            UPDATE users SET balance = $1 WHERE id = $2
            "#,
        )
        .bind(new_balance)
        .bind(user_id as i64)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query(
            r#"
            INSERT INTO transactions (amount, created_at, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, amount, created_at
            "#,
        )
        .bind(amount)
        .bind(Utc::now())
        .bind(user_id as i64)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(Self::row_to_transaction(&row)))
    }

    /// 사용자 거래 내역 조회 (최신순)
    /// Get transactions by user (newest first)
    pub async fn get_by_user(&self, user_id: u64, limit: i64, offset: i64) -> StoreResult<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, amount, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id as i64)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::row_to_transaction).collect())
    }

    pub async fn count_by_user(&self, user_id: u64) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM transactions WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }

    /// 구간 합계 (NUMERIC SUM, 거래 없으면 0)
    /// Sum of amounts in [from, to)
    ///
    /// SUM 결과는 범위 제한이 없으므로 rust_decimal 범위(약 7.9e28)를 넘으면 decode 에러
    /// (daily_totals 컬럼은 NUMERIC(30, 2)).
    pub async fn sum_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> StoreResult<Decimal> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM transactions
            WHERE created_at >= $1 AND created_at < $2
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    fn row_to_transaction(row: &sqlx::postgres::PgRow) -> Transaction {
        Transaction {
            id: row.get::<i64, _>("id") as u64,
            user_id: row.get::<i64, _>("user_id") as u64,
            amount: row.get("amount"),
            created_at: row.get("created_at"),
        }
    }
}
