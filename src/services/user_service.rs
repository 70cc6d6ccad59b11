//! User service for CRUD operations over the user store.

use log::{debug, error, info, warn};

use crate::constants::{
    DEFAULT_COUNT, DEFAULT_START, ERR_STORE_UNAVAILABLE, ERR_USER_NOT_FOUND, MAX_COUNT,
};
use crate::db::{Database, StoreError};
use crate::errors::ApiError;
use crate::models::{User, UserFields};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::{mask_email, mask_name};

pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        Self {
            repository: UserRepository::new(db),
        }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.repository.ensure_schema().await
    }

    pub async fn health_check(&self) -> Result<(), ApiError> {
        self.repository.ping().await.map_err(|e| {
            error!("Store health check failed: {}", e);
            ApiError::InternalServerError(ERR_STORE_UNAVAILABLE.to_string())
        })
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        debug!("Fetching user by ID: {}", id);
        self.repository.get_user(id).await.map_err(|e| {
            if matches!(e, StoreError::NotFound) {
                warn!("User not found with id: {}", id);
            }
            e.into()
        })
    }

    pub async fn create_user(&self, fields: UserFields) -> Result<User, ApiError> {
        let masked_email = mask_email(&fields.email);
        let user = self.repository.create_user(fields).await?;
        info!(
            "Created user {} ({}, {})",
            user.id,
            mask_name(&user.firstname),
            masked_email
        );
        Ok(user)
    }

    /// Replace every mutable field of a user and echo the submitted record.
    ///
    /// An unknown id is a no-op in the store and is not reported as an error.
    pub async fn update_user(&self, id: i64, fields: UserFields) -> Result<User, ApiError> {
        info!("Updating user with id: {}", id);
        self.repository.update_user(id, &fields).await?;
        info!("Successfully updated user: {}", id);
        Ok(fields.with_id(id))
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting user with id: {}", id);
        let removed = self.repository.delete_user(id).await?;
        if removed == 0 {
            warn!("Delete failed: User not found with id: {}", id);
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }
        info!("Successfully deleted user: {}", id);
        Ok(())
    }

    pub async fn list_users(
        &self,
        start: Option<i64>,
        count: Option<i64>,
    ) -> Result<Vec<User>, ApiError> {
        let (start, count) = list_bounds(start, count);
        debug!("Listing users start={} count={}", start, count);
        Ok(self.repository.list_users(start, count).await?)
    }
}

/// Resolve the offset and count for a listing.
///
/// Negative offsets start from the beginning, counts below 1 fall back to the
/// default and counts above the maximum are capped.
pub fn list_bounds(start: Option<i64>, count: Option<i64>) -> (i64, i64) {
    let start = start.unwrap_or(DEFAULT_START).max(0);
    let count = match count.unwrap_or(DEFAULT_COUNT) {
        c if c < 1 => DEFAULT_COUNT,
        c => c.min(MAX_COUNT),
    };
    (start, count)
}
