//! # User Repository
//!
//! Credential store: user records and their credit balance.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_memory_pool, models::UserForCreate, UserRepository};
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_memory_pool().await?;
//!
//! let user = UserRepository::create(
//!     &pool,
//!     UserForCreate::new("Alice".into(), "alice@example.com".into(), "$argon2id$...".into()),
//!     20,
//! )
//! .await?;
//!
//! let found = UserRepository::find_by_email(&pool, "alice@example.com").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use sqlx::query_as;
use uuid::Uuid;

use super::models::{User, UserForCreate};
use super::DbPool;
use crate::error::{AppError, Result};

pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// User repository for database operations.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by their (normalized) email address.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find a user by their ID.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<User>> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create a new user with `initial_credits`.
    ///
    /// # Errors
    ///
    /// [`AppError::Conflict`] when the email is taken, including when two
    /// registrations race past the existence check.
    pub async fn create(pool: &DbPool, user: UserForCreate, initial_credits: i64) -> Result<User> {
        let id = Uuid::new_v4().to_string();
        let now = lib_utils::now_utc();

        let created = query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, credits, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(initial_credits)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(USER_EXISTS_MESSAGE.to_string())
            }
            other => AppError::from(other),
        })?;

        tracing::info!(user_id = %created.id, "User created");
        Ok(created)
    }

    /// Atomically take `amount` credits, returning the new balance.
    ///
    /// The decrement only happens when the balance covers it, so concurrent
    /// spends can never drive it negative.
    pub async fn spend_credits(pool: &DbPool, user_id: &str, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(AppError::InvalidInput("Credit amount must be positive".to_string()));
        }

        let balance: Option<(i64,)> = query_as(
            r#"
            UPDATE users SET credits = credits - ?, updated_at = ?
            WHERE id = ? AND credits >= ?
            RETURNING credits
            "#,
        )
        .bind(amount)
        .bind(lib_utils::now_utc())
        .bind(user_id)
        .bind(amount)
        .fetch_optional(pool)
        .await?;

        balance.map(|(credits,)| credits).ok_or(AppError::InsufficientCredits)
    }

    /// Grant `amount` credits, returning the new balance.
    pub async fn add_credits(pool: &DbPool, user_id: &str, amount: i64) -> Result<i64> {
        if amount <= 0 {
            return Err(AppError::InvalidInput("Credit amount must be positive".to_string()));
        }

        let balance: Option<(i64,)> = query_as(
            "UPDATE users SET credits = credits + ?, updated_at = ? WHERE id = ? RETURNING credits",
        )
        .bind(amount)
        .bind(lib_utils::now_utc())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        balance
            .map(|(credits,)| credits)
            .ok_or_else(|| AppError::NotFoundOrForbidden("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::create_memory_pool;

    fn alice() -> UserForCreate {
        UserForCreate::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = create_memory_pool().await.unwrap();

        let user = UserRepository::create(&pool, alice(), 20).await.unwrap();
        assert_eq!(user.credits, 20);
        assert!(!user.id.is_empty());

        let by_email = UserRepository::find_by_email(&pool, "alice@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, user.id);

        let by_id = UserRepository::find_by_id(&pool, &user.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "alice@example.com");

        assert!(UserRepository::find_by_id(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = create_memory_pool().await.unwrap();

        UserRepository::create(&pool, alice(), 20).await.unwrap();
        let err = UserRepository::create(&pool, alice(), 20).await.unwrap_err();

        match err {
            AppError::Conflict(msg) => assert_eq!(msg, USER_EXISTS_MESSAGE),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spend_credits_until_exhausted() {
        let pool = create_memory_pool().await.unwrap();
        let user = UserRepository::create(&pool, alice(), 2).await.unwrap();

        assert_eq!(UserRepository::spend_credits(&pool, &user.id, 1).await.unwrap(), 1);
        assert!(matches!(
            UserRepository::spend_credits(&pool, &user.id, 2).await,
            Err(AppError::InsufficientCredits)
        ));
        assert_eq!(UserRepository::spend_credits(&pool, &user.id, 1).await.unwrap(), 0);
        assert!(matches!(
            UserRepository::spend_credits(&pool, &user.id, 1).await,
            Err(AppError::InsufficientCredits)
        ));

        let user = UserRepository::find_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(user.credits, 0);
    }

    #[tokio::test]
    async fn test_add_credits() {
        let pool = create_memory_pool().await.unwrap();
        let user = UserRepository::create(&pool, alice(), 0).await.unwrap();

        assert_eq!(UserRepository::add_credits(&pool, &user.id, 5).await.unwrap(), 5);
        assert!(UserRepository::add_credits(&pool, &user.id, 0).await.is_err());
        assert!(matches!(
            UserRepository::add_credits(&pool, "missing", 5).await,
            Err(AppError::NotFoundOrForbidden(_))
        ));
    }
}
