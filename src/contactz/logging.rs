//! Logging bootstrap for the binary.
//!
//! Library code only talks to the `log` facade. The CLI calls
//! [`init_logging`] once at startup to route records to stderr.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Initialization never panics; failures come back as a message.
//! - `RUST_LOG`, when set, overrides the requested level.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Initializes stderr logging at `level`.
///
/// # Errors
/// - Returns an error when `level` is not a valid log spec.
/// - Returns an error when logging was already started with another level.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = level.trim().to_lowercase();

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level, level
            ));
        }
        return Ok(());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_env_or_str(&level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        Ok(LoggingState {
            level: level.clone(),
            _logger: logger,
        })
    })?;

    debug!("logging initialized at level {}", state.level);
    Ok(())
}

