//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID";

// Request errors
pub const ERR_INVALID_PAYLOAD: &str = "Invalid request payload";
pub const ERR_INVALID_QUERY: &str = "Invalid query parameters";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";

// Store errors
pub const ERR_STORE_UNAVAILABLE: &str = "Database is unavailable";
