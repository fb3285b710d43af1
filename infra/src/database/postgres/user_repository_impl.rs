//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use cs_core::domain::entities::user::User;
use cs_core::repositories::{RepositoryError, UserRepository};

/// SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `check_violation`
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE for `not_null_violation`
const NOT_NULL_VIOLATION: &str = "23502";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, RepositoryError> {
        Ok(User {
            id: row.try_get::<Uuid, _>("id").map_err(database_error)?,
            login: row.try_get("login").map_err(database_error)?,
            password_hash: row.try_get("password").map_err(database_error)?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
        let query = r#"
            INSERT INTO users (id, login, password)
            VALUES ($1, $2, $3)
        "#;

        sqlx::query(query)
            .bind(user.id)
            .bind(&user.login)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(classify_error)?;

        Ok(user)
    }

    async fn find_user_by_login(&self, login: &str) -> Result<User, RepositoryError> {
        let query = r#"
            SELECT id, login, password
            FROM users
            WHERE login = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_error)?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// Map a SQLSTATE code to a repository error kind
pub(crate) fn from_sqlstate(code: &str, message: &str) -> RepositoryError {
    match code {
        UNIQUE_VIOLATION => RepositoryError::Unique,
        CHECK_VIOLATION | NOT_NULL_VIOLATION => RepositoryError::Validation(message.to_string()),
        _ => RepositoryError::Database(format!("{} ({})", message, code)),
    }
}

fn classify_error(error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::RowNotFound = error {
        return RepositoryError::NotFound;
    }
    if let Some(db_error) = error.as_database_error() {
        if let Some(code) = db_error.code() {
            return from_sqlstate(&code, db_error.message());
        }
    }
    database_error(error)
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "user query failed");
    RepositoryError::Database(error.to_string())
}
