// Constants for the Monty interpreter

/// Lowest value `pchar` accepts
pub const ASCII_MIN: i32 = 0;

/// Highest value `pchar` and `pstr` accept
pub const ASCII_MAX: i32 = 127;

/// Exit status for every diagnostic
pub const EXIT_FAILURE: u8 = 1;

/// Environment variable holding the tracing filter
pub const LOG_ENV: &str = "MONTY_LOG";

/// Filter used when `MONTY_LOG` is unset or invalid.
/// Logging stays off so stderr carries only diagnostics.
pub const DEFAULT_LOG_FILTER: &str = "off";

/// First token of a comment line
pub const COMMENT_PREFIX: char = '#';
