//! Store connection handling.
//!
//! The service talks to its relational store through sqlx's `Any` driver so the
//! same statements run against MySQL in deployment and SQLite locally and in
//! tests. Only the table DDL differs between the two dialects.

use log::info;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use thiserror::Error;

/// Errors raised by the data access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store did not report the inserted id")]
    MissingInsertId,
    #[error("unsupported database url scheme '{0}'")]
    UnsupportedBackend(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// SQL dialect of the configured store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}

impl Backend {
    /// Detect the backend from the scheme of a database url.
    pub fn from_url(url: &str) -> Result<Self, StoreError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "mysql" => Ok(Backend::MySql),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(StoreError::UnsupportedBackend(other.to_string())),
        }
    }

    /// DDL creating the `users` table if it does not exist yet.
    pub fn create_users_table(self) -> &'static str {
        match self {
            Backend::MySql => {
                "CREATE TABLE IF NOT EXISTS users (
                    id INT AUTO_INCREMENT PRIMARY KEY,
                    firstname VARCHAR(50) NOT NULL,
                    lastname VARCHAR(50) NOT NULL,
                    age INT NOT NULL,
                    email VARCHAR(50) NOT NULL
                )"
            }
            Backend::Sqlite => {
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    firstname VARCHAR(50) NOT NULL,
                    lastname VARCHAR(50) NOT NULL,
                    age INTEGER NOT NULL,
                    email VARCHAR(50) NOT NULL
                )"
            }
        }
    }
}

/// Pooled handle to the store, shared by every request.
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}

impl Database {
    /// Open a connection pool for `url`.
    ///
    /// In-memory SQLite databases live and die with their connection, so they
    /// are pinned to a single connection that is never recycled.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let backend = Backend::from_url(url)?;
        install_default_drivers();

        let options = if is_in_memory(url) {
            AnyPoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            AnyPoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = options.connect(url).await?;
        info!("Connected to {:?} store", backend);

        Ok(Self { pool, backend })
    }

    pub(crate) fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
