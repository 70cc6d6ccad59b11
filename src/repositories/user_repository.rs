//! User repository for all SQL operations on the `users` table.
//!
//! Every statement is parameterized; values never reach the SQL text.

use log::{debug, info};
use sqlx::AnyPool;

use crate::db::{Backend, Database, StoreError};
use crate::models::{User, UserFields};

const SELECT_USER: &str = "SELECT id, firstname, lastname, age, email FROM users WHERE id = ?";
const INSERT_USER: &str = "INSERT INTO users (firstname, lastname, age, email) VALUES (?, ?, ?, ?)";
const INSERT_USER_RETURNING_ID: &str =
    "INSERT INTO users (firstname, lastname, age, email) VALUES (?, ?, ?, ?) RETURNING id";
const UPDATE_USER: &str =
    "UPDATE users SET firstname = ?, lastname = ?, age = ?, email = ? WHERE id = ?";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";
const LIST_USERS: &str =
    "SELECT id, firstname, lastname, age, email FROM users ORDER BY id LIMIT ? OFFSET ?";

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: AnyPool,
    backend: Backend,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
            backend: db.backend(),
        }
    }

    /// Create the `users` table if it does not exist.
    ///
    /// Called once during application startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        info!("Ensuring users table exists...");
        sqlx::query(self.backend.create_users_table())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Round-trip to the store.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch one user by id, failing with `StoreError::NotFound` if absent.
    pub async fn get_user(&self, id: i64) -> Result<User, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        sqlx::query_as::<_, User>(SELECT_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Insert a new user and return it with the store-assigned id.
    ///
    /// sqlx's `Any` driver only reports `last_insert_id` for MySQL, so SQLite
    /// reads the id back from the insert itself with `RETURNING`.
    pub async fn create_user(&self, fields: UserFields) -> Result<User, StoreError> {
        let id = match self.backend {
            Backend::Sqlite => {
                sqlx::query_scalar::<_, i64>(INSERT_USER_RETURNING_ID)
                    .bind(&fields.firstname)
                    .bind(&fields.lastname)
                    .bind(fields.age)
                    .bind(&fields.email)
                    .fetch_one(&self.pool)
                    .await?
            }
            Backend::MySql => {
                let result = sqlx::query(INSERT_USER)
                    .bind(&fields.firstname)
                    .bind(&fields.lastname)
                    .bind(fields.age)
                    .bind(&fields.email)
                    .execute(&self.pool)
                    .await?;
                result.last_insert_id().ok_or(StoreError::MissingInsertId)?
            }
        };

        debug!("Repository: Inserted user with ID: {}", id);
        Ok(fields.with_id(id))
    }

    /// Replace every mutable column of the user. Unknown ids are a no-op.
    pub async fn update_user(&self, id: i64, fields: &UserFields) -> Result<(), StoreError> {
        debug!("Repository: Updating user with ID: {}", id);
        sqlx::query(UPDATE_USER)
            .bind(&fields.firstname)
            .bind(&fields.lastname)
            .bind(fields.age)
            .bind(&fields.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete a user by id. Unknown ids are a no-op; returns rows removed.
    pub async fn delete_user(&self, id: i64) -> Result<u64, StoreError> {
        debug!("Repository: Deleting user with ID: {}", id);
        let result = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// List users ordered by id, skipping `start` rows and returning at most `count`.
    pub async fn list_users(&self, start: i64, count: i64) -> Result<Vec<User>, StoreError> {
        debug!("Repository: Listing users start={} count={}", start, count);
        Ok(sqlx::query_as::<_, User>(LIST_USERS)
            .bind(count)
            .bind(start)
            .fetch_all(&self.pool)
            .await?)
    }
}
