//! Application-wide constants.

pub const APP_NAME: &str = "vellum";

/// Fallback log file when neither `--log-file` nor `VELLUM_LOG_FILE` is
/// set. Logs can't go to stdout while the TUI owns the terminal.
pub const DEFAULT_LOG_FILE: &str = "/tmp/vellum.log";

/// Env var holding the tracing filter directive (e.g. `debug`,
/// `vellum_core=trace`).
pub const LOG_FILTER_ENV: &str = "VELLUM_LOG";

/// Channel whose feed the mock workspace populates.
pub const HOME_CHANNEL: &str = "general";

/// Author name for messages typed locally.
pub const LOCAL_USER: &str = "You";

/// UI tick cadence in milliseconds (typing indicator, animations).
pub const TICK_MS: u64 = 250;

/// Ticks a mock typing burst lasts before it clears.
pub const TYPING_BURST_TICKS: u64 = 14;

/// Ticks between mock typing bursts.
pub const TYPING_IDLE_TICKS: u64 = 24;
