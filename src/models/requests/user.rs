//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::UserFields;

/// Request payload for creating or replacing a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// First name (max 50 characters)
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[schema(example = "Ada")]
    pub firstname: String,
    /// Last name (max 50 characters)
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    #[schema(example = "Lovelace")]
    pub lastname: String,
    /// Age in years
    #[validate(range(
        min = 0,
        max = 2147483647,
        message = "Age must be between 0 and 2147483647"
    ))]
    #[schema(example = 36)]
    pub age: i64,
    /// Email address (max 50 characters)
    #[validate(length(max = 50, message = "Email must be at most 50 characters"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserRequest> for UserFields {
    fn from(req: UserRequest) -> Self {
        Self {
            firstname: req.firstname,
            lastname: req.lastname,
            age: req.age,
            email: req.email,
        }
    }
}

/// Query parameters for listing users by offset and count
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub start: Option<i64>,
    pub count: Option<i64>,
}
