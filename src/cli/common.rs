//! Exit codes shared across CLI commands

/// Command ran to completion
pub const EXIT_SUCCESS: i32 = 0;
/// Output could not be written
pub const EXIT_FAILURE: i32 = 1;
/// Invocation was rejected (same status clap uses for usage errors)
pub const EXIT_USAGE: i32 = 2;
