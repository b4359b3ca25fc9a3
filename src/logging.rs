//! Stderr logging for the CLI.
//!
//! Level comes from `RUST_LOG` and defaults to `warn`, so regular command
//! output on stdout stays untouched.

use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";

/// Start the logger. The returned handle must stay alive for the process.
///
/// # Errors
/// Returns a human-readable message when the spec string is invalid or the
/// backend fails to start; callers may carry on without logging.
pub fn init_logging() -> Result<LoggerHandle, String> {
    Logger::try_with_env_or_str(DEFAULT_LEVEL)
        .map_err(|err| format!("invalid log spec: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))
}
