use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use crate::shared::errors::WalletError;

/// 금액 소수점 최대 자릿수 (NUMERIC(28, 2))
/// Maximum fractional digits accepted for an amount
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// 금액/잔고 정수부 최대 자릿수 (NUMERIC(28, 2) → 28 - 2)
/// Integer digits that fit the ledger columns
pub const MAX_AMOUNT_INTEGER_DIGITS: u32 = 26;

/// 원장 컬럼에 저장 가능한지 (|value| < 10^26)
/// True when `value` fits `NUMERIC(28, 2)`
pub fn fits_ledger_column(value: Decimal) -> bool {
    let bound = Decimal::from_i128_with_scale(10_i128.pow(MAX_AMOUNT_INTEGER_DIGITS), 0);
    value.abs() < bound
}

/// 원장 scale(2자리)로 맞춤. NUMERIC(28, 2) 저장 시와 같은 반올림
/// Round half away from zero to two places and pin the scale ("1.5" → "1.50")
pub fn to_ledger_scale(value: Decimal) -> Decimal {
    let mut scaled =
        value.round_dp_with_strategy(MAX_AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(MAX_AMOUNT_SCALE);
    scaled
}

/// 금액 검증: 소수점 2자리 이하, |amount| < 10^26
/// Validate an amount and return it at ledger scale
pub fn validate_amount(amount: Decimal) -> Result<Decimal, WalletError> {
    if amount.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(WalletError::Validation(format!(
            "amount must have at most {} decimal places: {}",
            MAX_AMOUNT_SCALE, amount
        )));
    }
    if !fits_ledger_column(amount) {
        return Err(WalletError::Validation(format!(
            "amount must have at most {} integer digits: {}",
            MAX_AMOUNT_INTEGER_DIGITS, amount
        )));
    }
    Ok(to_ledger_scale(amount))
}

// =====================================================
// Transaction 모델 (원장 항목)
// =====================================================
// 역할: 사용자 잔고에 적용된 금액 기록
// - amount > 0: 입금 (credit)
// - amount < 0: 출금 (debit)
// - 생성 후 수정/삭제 없음 (append-only)
// =====================================================

/// 원장 항목 (DB 저장용)
/// Ledger entry as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Transaction)]
pub struct Transaction {
    /// Transaction ID (BIGSERIAL, assigned in creation order)
    pub id: u64,

    /// Owning user ID
    pub user_id: u64,

    /// Signed amount
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,

    /// Created timestamp (immutable)
    pub created_at: DateTime<Utc>,
}

/// 새 잔고 계산 (정확한 decimal 덧셈)
/// Exact decimal addition of an amount to a balance.
/// `None` when the result does not fit `NUMERIC(28, 2)`
pub fn next_balance(balance: Decimal, amount: Decimal) -> Option<Decimal> {
    balance
        .checked_add(amount)
        .filter(|next| fits_ledger_column(*next))
}

/// 거래 처리 요청
/// Process transaction request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ProcessTransactionRequest)]
pub struct ProcessTransactionRequest {
    /// The ID of the user whose wallet is being updated
    #[schema(example = 1)]
    pub user_id: u64,

    /// Amount to add (positive) or subtract (negative).
    /// Accepts a JSON number or a decimal string.
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
}

impl ProcessTransactionRequest {
    /// 금액 검증 (자릿수, 범위), 금액은 원장 scale로 정규화
    pub fn validate(self) -> Result<Self, WalletError> {
        Ok(Self {
            user_id: self.user_id,
            amount: validate_amount(self.amount)?,
        })
    }
}

/// 거래 처리 응답
/// Process transaction response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ProcessTransactionResponse)]
pub struct ProcessTransactionResponse {
    /// The ID of the created transaction
    #[schema(example = 1)]
    pub reference_id: u64,
}

/// 거래 내역 항목 (사용자 정보 제외)
/// Transaction history item (no nested user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = TransactionResponse)]
pub struct TransactionResponse {
    pub id: u64,

    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,

    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            amount: tx.amount,
            created_at: tx.created_at,
        }
    }
}

/// 사용자 거래 내역 응답 (페이지네이션)
/// Paginated transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = UserTransactionsResponse)]
pub struct UserTransactionsResponse {
    pub transactions: Vec<TransactionResponse>,

    /// Total number of the user's transactions (ignores pagination)
    pub total: u64,
}

/// 거래 내역 쿼리 파라미터
/// Query parameters for transaction history
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransactionsQuery {
    /// 페이지 번호 (기본: 1)
    /// Page number (default: 1)
    #[param(example = 1)]
    #[serde(default)]
    pub page: Option<i64>,

    /// 페이지 크기 (기본: 10, 최대: 1000)
    /// Page size (default: 10, max: 1000)
    #[param(example = 10)]
    #[serde(default)]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn next_balance_is_exact() {
        let balance = Decimal::from_str("100.10").unwrap();
        let amount = Decimal::from_str("50.05").unwrap();
        assert_eq!(next_balance(balance, amount), Some(Decimal::from_str("150.15").unwrap()));
    }

    #[test]
    fn next_balance_reports_overflow() {
        assert_eq!(next_balance(Decimal::MAX, Decimal::ONE), None);
    }

    #[test]
    fn next_balance_stays_within_ledger_column() {
        let largest = Decimal::from_str("99999999999999999999999999.99").unwrap();
        let cent = Decimal::from_str("0.01").unwrap();
        assert_eq!(next_balance(largest - cent, cent), Some(largest));
        assert_eq!(next_balance(largest, cent), None);
        assert_eq!(next_balance(-largest, -cent), None);
    }

    #[test]
    fn validate_rejects_amounts_beyond_26_integer_digits() {
        let too_large = ProcessTransactionRequest {
            user_id: 1,
            amount: Decimal::from_str("100000000000000000000000000").unwrap(),
        };
        assert!(matches!(too_large.validate(), Err(WalletError::Validation(_))));

        assert!(matches!(
            validate_amount(Decimal::from_str("-100000000000000000000000000").unwrap()),
            Err(WalletError::Validation(_))
        ));
        assert!(validate_amount(Decimal::from_str("99999999999999999999999999.99").unwrap()).is_ok());
    }

    #[test]
    fn validate_rejects_sub_cent_amounts() {
        let request = ProcessTransactionRequest {
            user_id: 1,
            amount: Decimal::from_str("1.005").unwrap(),
        };
        assert!(matches!(request.validate(), Err(WalletError::Validation(_))));

        let trailing_zero = ProcessTransactionRequest {
            user_id: 1,
            amount: Decimal::from_str("1.500").unwrap(),
        };
        assert_eq!(trailing_zero.validate().unwrap().amount.to_string(), "1.50");
    }

    #[test]
    fn ledger_scale_pins_two_places() {
        assert_eq!(to_ledger_scale(Decimal::from_str("7").unwrap()).to_string(), "7.00");
        assert_eq!(to_ledger_scale(Decimal::from_str("-0.5").unwrap()).to_string(), "-0.50");
        assert_eq!(to_ledger_scale(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
    }

    #[test]
    fn request_accepts_number_or_string_amount() {
        let from_number: ProcessTransactionRequest =
            serde_json::from_str(r#"{"userId": 3, "amount": -50.25}"#).unwrap();
        assert_eq!(from_number.amount, Decimal::from_str("-50.25").unwrap());

        let from_string: ProcessTransactionRequest =
            serde_json::from_str(r#"{"userId": 3, "amount": "100.10"}"#).unwrap();
        assert_eq!(from_string.amount, Decimal::from_str("100.10").unwrap());
    }
}
