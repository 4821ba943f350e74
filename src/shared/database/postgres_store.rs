use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::domains::wallet::models::{Transaction, User};
use crate::domains::daily_total::models::DailyTotal;
use crate::shared::database::{
    DailyTotalRepository, Database, LedgerStore, TransactionRepository, UserRepository,
};
use crate::shared::errors::StoreResult;

/// PostgreSQL 저장소
/// PostgreSQL-backed ledger store
///
/// Repository는 호출마다 생성 (pool clone은 Arc clone)
#[derive(Clone)]
pub struct PgLedgerStore {
    db: Database,
}

impl PgLedgerStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> UserRepository {
        UserRepository::new(self.db.pool().clone())
    }

    fn transactions(&self) -> TransactionRepository {
        TransactionRepository::new(self.db.pool().clone())
    }

    fn daily_totals(&self) -> DailyTotalRepository {
        DailyTotalRepository::new(self.db.pool().clone())
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn count_users_matching(&self, username: &str, email: &str) -> StoreResult<u64> {
        self.users().count_by_username_or_email(username, email).await
    }

    async fn insert_user(&self, username: &str, email: &str) -> StoreResult<User> {
        self.users().create_user(username, email).await
    }

    async fn find_user(&self, user_id: u64) -> StoreResult<Option<User>> {
        self.users().get_user_by_id(user_id).await
    }

    async fn apply_transaction(&self, user_id: u64, amount: Decimal) -> StoreResult<Option<Transaction>> {
        self.transactions().apply_to_balance(user_id, amount).await
    }

    async fn list_user_transactions(
        &self,
        user_id: u64,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>> {
        self.transactions().get_by_user(user_id, limit, offset).await
    }

    async fn count_user_transactions(&self, user_id: u64) -> StoreResult<u64> {
        self.transactions().count_by_user(user_id).await
    }

    async fn sum_transactions_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Decimal> {
        self.transactions().sum_between(from, to).await
    }

    async fn insert_daily_total(
        &self,
        date: DateTime<Utc>,
        total_amount: Decimal,
    ) -> StoreResult<DailyTotal> {
        self.daily_totals().create(date, total_amount).await
    }

    async fn list_daily_totals(&self, limit: i64) -> StoreResult<Vec<DailyTotal>> {
        self.daily_totals().get_recent(limit).await
    }
}
