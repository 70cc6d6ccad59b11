//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{MSG_HEALTH_OK, MSG_RESULT_SUCCESS, MSG_SERVER_RUNNING};

/// Body returned by operations that have no entity to echo
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultResponse {
    #[schema(example = "success")]
    pub result: String,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self {
            result: MSG_RESULT_SUCCESS.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: MSG_HEALTH_OK.to_string(),
            message: MSG_SERVER_RUNNING.to_string(),
        }
    }
}
