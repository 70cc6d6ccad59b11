//! Success message constants used throughout the application.

pub const MSG_RESULT_SUCCESS: &str = "success";
pub const MSG_HEALTH_OK: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
