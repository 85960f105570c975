//! Exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Malformed records, or dropped dependencies under the `error` policy
pub const DATAERR: i32 = 65;

/// Input file missing
pub const NOINPUT: i32 = 66;

/// Reading input or writing output failed
pub const IOERR: i32 = 74;

/// Invalid configuration
pub const CONFIG: i32 = 78;
