//! Offset/limit constants for the user listing endpoint.

/// Offset used when the request does not specify `start`.
pub const DEFAULT_START: i64 = 0;

/// Number of records returned when `count` is missing or below 1.
pub const DEFAULT_COUNT: i64 = 10;

/// Upper bound on `count` to prevent excessive data retrieval.
pub const MAX_COUNT: i64 = 100;
