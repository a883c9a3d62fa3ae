//! Logging macros gated by a per-module `ENABLE_LOGS` flag.
//!
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_info, log_error};
//!
//! log_info!("pattern enqueued");
//! ```

/// Info-level log, emitted only when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}

/// Logger for one run. `rust_log` (the `RUST_LOG` value) overrides the Info
/// default; `debug` forces Debug regardless.
pub fn builder(rust_log: Option<&str>, debug: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);

    // Later global directives replace earlier ones
    if let Some(filters) = rust_log.filter(|f| !f.trim().is_empty()) {
        builder.parse_filters(filters);
    }
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}
