//! Logging macros gated by a module-level `ENABLE_LOGS` flag.
//!
//! Scoring runs once per trial and the session store is touched on every
//! capture, so each module decides for itself whether it is chatty:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_warn};
//!
//! log_warn!("trial {} has no score", trial_id);
//! ```
//!
//! Output goes through the `log` facade; the binary installs `env_logger`
//! via [`crate::init_logging`].

/// Info-level log line, emitted only when the calling module's
/// `ENABLE_LOGS` is `true`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            ::log::info!($($arg)*);
        }
    };
}

/// Debug-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            ::log::debug!($($arg)*);
        }
    };
}

/// Warn-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            ::log::warn!($($arg)*);
        }
    };
}
