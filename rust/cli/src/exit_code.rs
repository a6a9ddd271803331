//! Exit codes returned by [`crate::run`].

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Usage error, invalid card, rule violation, configuration or renderer failure.
pub const ERROR: i32 = 2;
