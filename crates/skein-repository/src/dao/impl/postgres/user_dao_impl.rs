//! PostgreSQL user DAO.

use crate::dao::{RecordDao, UserDao};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skein_core::{RecordId, SkeinError, SkeinResult, User};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const USER_COLUMNS: &str = "id, email, name, role, password_hash, created_at";

/// PostgreSQL user DAO.
#[derive(Clone)]
pub struct PgUserDaoImpl {
    pool: Arc<DatabasePool>,
}

impl PgUserDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = SkeinError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse()
            .map_err(|e| SkeinError::Internal(format!("Invalid role in database: {e}")))?;

        Ok(User {
            id: row.id,
            email: row.email,
            name: row.name,
            role,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl RecordDao<User> for PgUserDaoImpl {
    async fn insert(&self, user: &User) -> SkeinResult<User> {
        debug!("Inserting user {}", user.email);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, name, role, password_hash) \
             VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .fetch_one(self.pool.inner())
        .await?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: RecordId) -> SkeinResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> SkeinResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: &User) -> SkeinResult<Option<User>> {
        debug!("Updating user {}", user.id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET email = $1, name = $2, role = $3, password_hash = $4 \
             WHERE id = $5 RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(&user.password_hash)
        .bind(user.id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn delete(&self, id: RecordId) -> SkeinResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserDao for PgUserDaoImpl {
    async fn find_by_email(&self, email: &str) -> SkeinResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }
}

impl std::fmt::Debug for PgUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserDaoImpl").finish_non_exhaustive()
    }
}
