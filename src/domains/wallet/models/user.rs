use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use rust_decimal::Decimal;
use crate::shared::errors::WalletError;

/// username / email 최대 길이 (VARCHAR(255))
pub const MAX_USERNAME_LEN: usize = 255;
pub const MAX_EMAIL_LEN: usize = 255;

// =====================================================
// User 모델
// =====================================================
// 역할: 지갑 소유자
// balance는 해당 사용자의 모든 거래 amount 합계 (직접 수정 불가)
// balance is the materialized sum of the user's transactions
// =====================================================

/// 사용자 (DB에서 조회한 전체 필드)
/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = User)]
pub struct User {
    /// User ID (BIGSERIAL, auto-generated)
    #[schema(example = 1)]
    pub id: u64,

    /// Unique username
    #[schema(example = "john_doe")]
    pub username: String,

    #[schema(example = "john.doe@example.com")]
    pub email: String,

    /// Current balance (decimal string)
    /// 현재 잔고
    #[schema(value_type = String, example = "4000.00")]
    pub balance: Decimal,
}

/// 조회 가능한 사용자 필드
/// Selectable user fields for `fields=` projections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Username,
    Email,
    Balance,
}

impl UserField {
    /// fields 파라미터가 없을 때의 기본값
    pub const DEFAULT: [UserField; 4] = [
        UserField::Id,
        UserField::Username,
        UserField::Email,
        UserField::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Username => "username",
            UserField::Email => "email",
            UserField::Balance => "balance",
        }
    }

    /// 쉼표로 구분된 필드 목록 파싱 ("id,balance")
    /// Parse a comma-separated field list. Blank entries are ignored,
    /// an empty list falls back to the default set.
    pub fn parse_list(raw: &str) -> Result<Vec<UserField>, WalletError> {
        let mut fields = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let field = name.parse::<UserField>()?;
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        if fields.is_empty() {
            return Ok(UserField::DEFAULT.to_vec());
        }
        Ok(fields)
    }
}

impl FromStr for UserField {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(UserField::Id),
            "username" => Ok(UserField::Username),
            "email" => Ok(UserField::Email),
            "balance" => Ok(UserField::Balance),
            other => Err(WalletError::Validation(format!("Unknown user field: {}", other))),
        }
    }
}

/// 필드 선택 결과 (선택되지 않은 필드는 응답에서 생략)
/// Partial user; unselected fields are omitted from the JSON body
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[schema(as = UserDetails)]
pub struct UserDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub balance: Option<Decimal>,
}

impl UserDetails {
    pub fn project(user: User, fields: &[UserField]) -> Self {
        let mut details = UserDetails::default();
        let User { id, username, email, balance } = user;
        for field in fields {
            match field {
                UserField::Id => details.id = Some(id),
                UserField::Username => details.username = Some(username.clone()),
                UserField::Email => details.email = Some(email.clone()),
                UserField::Balance => details.balance = Some(balance),
            }
        }
        details
    }
}

/// 사용자 생성 요청
/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateUserRequest)]
pub struct CreateUserRequest {
    /// The username of the new user
    #[schema(example = "john_doe")]
    pub username: String,

    /// The email address of the new user
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl CreateUserRequest {
    /// 요청 형식 검증 (공백 제거 후 길이, 이메일 형식)
    /// Trim and validate the request shape
    pub fn validate(self) -> Result<Self, WalletError> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();

        if username.is_empty() {
            return Err(WalletError::Validation("username must not be empty".to_string()));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(WalletError::Validation(format!(
                "username must be at most {} characters",
                MAX_USERNAME_LEN
            )));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(WalletError::Validation(format!(
                "email must be at most {} characters",
                MAX_EMAIL_LEN
            )));
        }
        if !is_plausible_email(&email) {
            return Err(WalletError::Validation(format!("invalid email: {}", email)));
        }

        Ok(Self { username, email })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// 잔고 조회 응답
/// Balance response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = BalanceResponse)]
pub struct BalanceResponse {
    /// The current balance of the user
    #[schema(value_type = String, example = "4000.00")]
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            balance: Decimal::new(1050, 2),
        }
    }

    #[test]
    fn parse_list_defaults_when_blank() {
        assert_eq!(UserField::parse_list("").unwrap(), UserField::DEFAULT.to_vec());
        assert_eq!(UserField::parse_list(" , ").unwrap(), UserField::DEFAULT.to_vec());
    }

    #[test]
    fn parse_list_dedups_and_trims() {
        let fields = UserField::parse_list("balance, id,balance").unwrap();
        assert_eq!(fields, vec![UserField::Balance, UserField::Id]);
    }

    #[test]
    fn parse_list_rejects_unknown_field() {
        let err = UserField::parse_list("id,password").unwrap_err();
        assert!(matches!(err, WalletError::Validation(_)));
    }

    #[test]
    fn project_omits_unselected_fields() {
        let details = UserDetails::project(sample_user(), &[UserField::Username]);
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "alice" }));
    }

    #[test]
    fn validate_trims_and_checks_email() {
        let ok = CreateUserRequest {
            username: "  bob ".to_string(),
            email: "bob@example.com".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(ok.username, "bob");

        let bad = CreateUserRequest {
            username: "bob".to_string(),
            email: "not-an-email".to_string(),
        }
        .validate();
        assert!(matches!(bad, Err(WalletError::Validation(_))));

        let empty = CreateUserRequest {
            username: "   ".to_string(),
            email: "bob@example.com".to_string(),
        }
        .validate();
        assert!(matches!(empty, Err(WalletError::Validation(_))));
    }
}
