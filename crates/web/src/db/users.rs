//! User repository for database operations.

use sqlx::PgPool;

use gigmarket_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with email and password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(user)
    }

    /// Get a user and their password hash by email.
    ///
    /// Returns `None` if no user is registered under this email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserWithHash>(
            r"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                User {
                    id: r.id,
                    email: r.email,
                    created_at: r.created_at,
                    updated_at: r.updated_at,
                },
                r.password_hash,
            )
        }))
    }
}

/// Internal row type; the hash never leaves the auth service.
#[derive(sqlx::FromRow)]
struct UserWithHash {
    id: UserId,
    email: Email,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}
