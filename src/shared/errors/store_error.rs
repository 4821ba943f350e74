use thiserror::Error;

/// PostgreSQL unique_violation SQLSTATE
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL numeric_value_out_of_range SQLSTATE
const NUMERIC_OUT_OF_RANGE: &str = "22003";

/// 저장소 계층 에러
/// Ledger store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// UNIQUE 제약 위반 (예: username 중복)
    /// Unique constraint violated
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// 잔고 계산 오버플로
    /// Balance arithmetic overflowed the decimal range
    #[error("Balance overflow for user: id={user_id}")]
    BalanceOverflow { user_id: u64 },

    /// 컬럼 범위(NUMERIC(28, 2))를 벗어난 값
    /// Value does not fit its numeric column
    #[error("Numeric value out of range: {0}")]
    OutOfRange(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return StoreError::UniqueViolation(db_err.message().to_string())
                }
                Some(NUMERIC_OUT_OF_RANGE) => {
                    return StoreError::OutOfRange(db_err.message().to_string())
                }
                _ => {}
            }
        }
        StoreError::Database(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
