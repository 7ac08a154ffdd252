//! Process exit statuses of the `icnspack` command.

pub const SUCCESS: i32 = 0;
pub const MISSING_INPUT: i32 = 1; // An input path is absent or not a regular file
pub const FAILURE: i32 = 1; // Read/write or framing failure
pub const USAGE: i32 = 2; // Wrong argument count; clap's own usage status
