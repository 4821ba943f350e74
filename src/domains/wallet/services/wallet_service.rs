use std::sync::Arc;
use rust_decimal::Decimal;
use crate::domains::wallet::models::{
    validate_amount, BalanceResponse, ProcessTransactionResponse, TransactionResponse, User,
    UserDetails, UserField, UserTransactionsResponse,
};
use crate::shared::database::LedgerStore;
use crate::shared::errors::WalletError;
use crate::shared::utils::Pagination;

/// 지갑 서비스
/// 역할: 사용자 생성/조회, 거래 처리, 거래 내역 조회
/// WalletService: handles user and ledger business logic
#[derive(Clone)]
pub struct WalletService {
    store: Arc<dyn LedgerStore>,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// 사용자 생성
    /// Create user
    ///
    /// Note: 중복 확인과 INSERT는 원자적이지 않음.
    /// username UNIQUE 제약이 최종 보호 역할 (위반 시에도 Conflict)
    pub async fn create_user(&self, username: &str, email: &str) -> Result<User, WalletError> {
        // 1. username 또는 email 중복 확인
        let existing = self.store.count_users_matching(username, email).await?;
        if existing > 0 {
            return Err(WalletError::Conflict);
        }

        // 2. 사용자 생성 (balance = 0)
        let user = self.store.insert_user(username, email).await?;
        tracing::debug!(user_id = user.id, username = %user.username, "user created");

        Ok(user)
    }

    /// 사용자 조회 (필드 선택)
    /// Get user by ID, restricted to `fields` (default: id, username, email, balance)
    pub async fn get_user_by_id(
        &self,
        user_id: u64,
        fields: Option<&[UserField]>,
    ) -> Result<UserDetails, WalletError> {
        let user = self.require_user(user_id).await?;
        let fields = fields.unwrap_or(&UserField::DEFAULT);
        Ok(UserDetails::project(user, fields))
    }

    /// 잔고 조회
    /// Get balance
    pub async fn get_balance_by_id(&self, user_id: u64) -> Result<BalanceResponse, WalletError> {
        let user = self.require_user(user_id).await?;
        Ok(BalanceResponse { balance: user.balance })
    }

    /// 거래 처리 (입금: 양수, 출금: 음수)
    /// Apply a signed amount to the user's balance and record it
    ///
    /// 잔고 하한 없음 (마이너스 잔고 허용)
    /// 금액은 소수점 2자리, 정수부 26자리 이하 (NUMERIC(28, 2))
    pub async fn process_transaction(
        &self,
        user_id: u64,
        amount: Decimal,
    ) -> Result<ProcessTransactionResponse, WalletError> {
        let amount = validate_amount(amount)?;
        let transaction = self
            .store
            .apply_transaction(user_id, amount)
            .await?
            .ok_or(WalletError::UserNotFound { id: user_id })?;

        tracing::debug!(
            user_id,
            reference_id = transaction.id,
            amount = %amount,
            "transaction processed"
        );

        Ok(ProcessTransactionResponse {
            reference_id: transaction.id,
        })
    }

    /// 사용자 거래 내역 조회 (최신순, 페이지네이션)
    /// Get user's transactions, newest first
    pub async fn get_user_transactions(
        &self,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<UserTransactionsResponse, WalletError> {
        self.require_user(user_id).await?;

        let transactions = self
            .store
            .list_user_transactions(user_id, pagination.limit, pagination.offset())
            .await?;
        let total = self.store.count_user_transactions(user_id).await?;

        Ok(UserTransactionsResponse {
            transactions: transactions.into_iter().map(TransactionResponse::from).collect(),
            total,
        })
    }

    async fn require_user(&self, user_id: u64) -> Result<User, WalletError> {
        self.store
            .find_user(user_id)
            .await?
            .ok_or(WalletError::UserNotFound { id: user_id })
    }
}
