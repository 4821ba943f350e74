use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use crate::domains::wallet::models::{
    fits_ledger_column, next_balance, to_ledger_scale, Transaction, User,
};
use crate::domains::daily_total::models::DailyTotal;
use crate::shared::database::LedgerStore;
use crate::shared::errors::{StoreError, StoreResult};
use crate::shared::utils::{Clock, SystemClock};

/// 메모리 저장소
/// In-process ledger store
///
/// PostgreSQL 저장소와 같은 의미를 유지합니다:
/// - username UNIQUE
/// - 잔고 갱신 + 거래 추가는 하나의 잠금 안에서 수행
/// - 거래 내역은 created_at DESC, id DESC 정렬
/// - 금액/잔고는 NUMERIC(28, 2)처럼 소수점 2자리로 저장, 범위 초과는 에러
#[derive(Clone)]
pub struct MemoryLedgerStore {
    inner: Arc<Mutex<Inner>>,
    clock: Arc<dyn Clock>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    transactions: Vec<Transaction>,
    daily_totals: Vec<DailyTotal>,
    next_user_id: u64,
    next_transaction_id: u64,
    next_daily_total_id: u64,
}

impl Inner {
    fn next_id(counter: &mut u64) -> u64 {
        *counter += 1;
        *counter
    }
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// 거래 생성 시각을 주입한 시계로 기록
    /// Stamp `created_at` from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            clock,
        }
    }

    /// 사용자 잔고와 거래 합계가 모두 일치하는지 확인
    /// True when every user's balance equals the sum of their transactions
    pub fn ledger_is_consistent(&self) -> bool {
        let inner = self.inner.lock();
        inner.users.values().all(|user| {
            let sum: Decimal = inner
                .transactions
                .iter()
                .filter(|tx| tx.user_id == user.id)
                .map(|tx| tx.amount)
                .sum();
            sum == user.balance
        })
    }
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn count_users_matching(&self, username: &str, email: &str) -> StoreResult<u64> {
        let inner = self.inner.lock();
        let count = inner
            .users
            .values()
            .filter(|u| u.username == username || u.email == email)
            .count();
        Ok(count as u64)
    }

    async fn insert_user(&self, username: &str, email: &str) -> StoreResult<User> {
        let mut inner = self.inner.lock();
        if inner.users.values().any(|u| u.username == username) {
            return Err(StoreError::UniqueViolation(format!(
                "duplicate username: {}",
                username
            )));
        }

        let id = Inner::next_id(&mut inner.next_user_id);
        let user = User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            balance: to_ledger_scale(Decimal::ZERO),
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, user_id: u64) -> StoreResult<Option<User>> {
        Ok(self.inner.lock().users.get(&user_id).cloned())
    }

    async fn apply_transaction(&self, user_id: u64, amount: Decimal) -> StoreResult<Option<Transaction>> {
        let amount = to_ledger_scale(amount);
        if !fits_ledger_column(amount) {
            return Err(StoreError::OutOfRange(format!("amount {}", amount)));
        }
        let created_at = self.clock.now();
        let mut inner = self.inner.lock();

        let balance = match inner.users.get(&user_id) {
            Some(user) => user.balance,
            None => return Ok(None),
        };
        let new_balance = next_balance(balance, amount).ok_or(StoreError::BalanceOverflow { user_id })?;

        let id = Inner::next_id(&mut inner.next_transaction_id);
        let transaction = Transaction {
            id,
            user_id,
            amount,
            created_at,
        };
        if let Some(user) = inner.users.get_mut(&user_id) {
            user.balance = new_balance;
        }
        inner.transactions.push(transaction.clone());

        Ok(Some(transaction))
    }

    async fn list_user_transactions(
        &self,
        user_id: u64,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Transaction>> {
        let inner = self.inner.lock();
        let mut rows: Vec<Transaction> = inner
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_user_transactions(&self, user_id: u64) -> StoreResult<u64> {
        let inner = self.inner.lock();
        Ok(inner.transactions.iter().filter(|tx| tx.user_id == user_id).count() as u64)
    }

    async fn sum_transactions_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Decimal> {
        let inner = self.inner.lock();
        inner
            .transactions
            .iter()
            .filter(|tx| from <= tx.created_at && tx.created_at < to)
            .try_fold(Decimal::ZERO, |acc, tx| acc.checked_add(tx.amount))
            .ok_or_else(|| StoreError::Database("daily sum overflowed".to_string()))
    }

    async fn insert_daily_total(
        &self,
        date: DateTime<Utc>,
        total_amount: Decimal,
    ) -> StoreResult<DailyTotal> {
        let mut inner = self.inner.lock();
        let id = Inner::next_id(&mut inner.next_daily_total_id);
        let daily_total = DailyTotal {
            id,
            date,
            total_amount: to_ledger_scale(total_amount),
        };
        inner.daily_totals.push(daily_total.clone());
        Ok(daily_total)
    }

    async fn list_daily_totals(&self, limit: i64) -> StoreResult<Vec<DailyTotal>> {
        let inner = self.inner.lock();
        let mut rows = inner.daily_totals.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
