// =====================================================
// Ledger Store Trait (저장소 인터페이스)
// =====================================================
// Service 계층은 이 trait만 사용하여 저장소와 통신합니다.
//
// 구현체:
// - PgLedgerStore: PostgreSQL (sqlx repositories)
// - MemoryLedgerStore: 프로세스 내 메모리 (테스트, DB 없이 실행)
// =====================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::domains::wallet::models::{Transaction, User};
use crate::domains::daily_total::models::DailyTotal;
use crate::shared::errors::StoreResult;

/// 원장 저장소 인터페이스
/// Ledger store interface
///
/// 구현체가 보장해야 하는 것:
/// - username UNIQUE 제약 (위반 시 `StoreError::UniqueViolation`)
/// - 금액/잔고는 NUMERIC(28, 2) 범위와 scale: 범위 밖 금액은 `StoreError::OutOfRange`,
///   범위 밖 잔고는 `StoreError::BalanceOverflow`
/// - `apply_transaction`의 잔고 갱신과 거래 추가는 하나의 원자적 단위
/// - 같은 사용자에 대한 동시 `apply_transaction`은 직렬화됨 (lost update 없음)
#[async_trait]
pub trait LedgerStore: Send + Sync {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 사용자 (Users)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// username 또는 email이 일치하는 사용자 수
    /// Count users matching `username` OR `email`
    async fn count_users_matching(&self, username: &str, email: &str) -> StoreResult<u64>;

    /// 사용자 생성 (balance = 0)
    /// Insert a user with a zero balance
    async fn insert_user(&self, username: &str, email: &str) -> StoreResult<User>;

    async fn find_user(&self, user_id: u64) -> StoreResult<Option<User>>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 거래 (Transactions)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 잔고 갱신 + 거래 추가 (원자적)
    /// Atomically add `amount` to the user's balance and append a ledger entry.
    ///
    /// # Returns
    /// * `Ok(Some(Transaction))` - 생성된 거래
    /// * `Ok(None)` - 사용자가 없음 (아무것도 기록하지 않음)
    async fn apply_transaction(&self, user_id: u64, amount: Decimal) -> StoreResult<Option<Transaction>>;

    /// 사용자 거래 내역 (created_at DESC, id DESC)
    /// User's transactions, newest first
    async fn list_user_transactions(
        &self,
        user_id: u64,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>>;

    async fn count_user_transactions(&self, user_id: u64) -> StoreResult<u64>;

    /// [from, to) 구간 거래 금액 합계 (없으면 0)
    /// Sum of amounts with `from <= created_at < to`; zero when empty
    async fn sum_transactions_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Decimal>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 일일 합계 (Daily totals)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    async fn insert_daily_total(
        &self,
        date: DateTime<Utc>,
        total_amount: Decimal,
    ) -> StoreResult<DailyTotal>;

    /// 최근 일일 합계 (date DESC, id DESC)
    async fn list_daily_totals(&self, limit: i64) -> StoreResult<Vec<DailyTotal>>;
}
