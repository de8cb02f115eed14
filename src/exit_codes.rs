//! Exit code constants for the masctl CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file)
//! - 2: Validation failure (one or more invariant violations)
//! - 3: Shape error (a document could not be decoded)
//! - 4: Config error (invalid validator configuration)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a file that cannot be read.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the documents decoded but broke one or more invariants.
pub const VALIDATION_FAILURE: i32 = 2;

/// Shape error: a payload did not decode into the expected structure.
pub const SHAPE_ERROR: i32 = 3;

/// Config error: the validator configuration is invalid.
pub const CONFIG_ERROR: i32 = 4;
