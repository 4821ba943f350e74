use sqlx::{PgPool, Row};
use crate::domains::wallet::models::User;
use crate::shared::errors::StoreResult;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // username 또는 email 중복 개수 (존재 여부 확인용)
    // Count users with the same username or email
    pub async fn count_by_username_or_email(&self, username: &str, email: &str) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM users
            WHERE username = $1 OR email = $2
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }

    pub async fn create_user(&self, username: &str, email: &str) -> StoreResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email, balance
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::row_to_user(&row))
    }

    // ID로 사용자 조회
    // Get user by ID
    pub async fn get_user_by_id(&self, id: u64) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, balance
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::row_to_user))
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
        User {
            id: row.get::<i64, _>("id") as u64,
            username: row.get("username"),
            email: row.get("email"),
            balance: row.get("balance"),
        }
    }
}
