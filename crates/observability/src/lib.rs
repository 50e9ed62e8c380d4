//! Tracing/logging setup shared by action bus processes.

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// Fails without installing anything when `ACTIONBUS_LOG_FORMAT` is unrecognized.
pub fn init() -> Result<(), UnknownLogFormat> {
    tracing::init()
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig, UnknownLogFormat, init_with};
