//! User-related validators.

use crate::constants::ERR_INVALID_USER_ID;
use crate::errors::ApiError;

/// Parse a user id taken from the request path.
pub fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(ERR_INVALID_USER_ID.to_string()))
}
