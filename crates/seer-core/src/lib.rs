//! Seer Core Library
//!
//! Annotated error values: each [`SeerError`] names the operation that
//! failed, carries a user-facing message and a status code, optionally wraps
//! the error that caused it, and can record where it was created.
//!
//! ```
//! use seer_core::SeerConfig;
//!
//! let config = SeerConfig::default().with_collect_provenance(false);
//! let err = config
//!     .wrap("loadConfig", std::io::Error::other("file not found"))
//!     .with_code(404);
//!
//! assert_eq!(err.detailed_string(), "loadConfig: an error occurred");
//! assert_eq!(err.to_string(), "loadConfig\n\tWrapped error: file not found");
//! assert_eq!(err.raw_error(), "file not found");
//! assert_eq!(err.code(), 404);
//! assert!(!err.unwrap_original().1);
//! ```

pub mod config;
pub mod error;
pub mod provenance;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigError, SeerConfig, set_collect_provenance, set_default_code, set_default_message,
};
pub use error::{BoxError, Chain, OptionExt, ResultExt, SeerError, SeerResult};
pub use provenance::{CallSite, Provenance};

/// Create a [`SeerError`] from the process-wide configuration, recording the
/// enclosing function as the caller.
///
/// ```
/// let err = seer_core::new!("validateInput", "even number: 4");
/// assert_eq!(err.message(), "even number: 4");
///
/// let err = seer_core::new!("validateInput", "even number: 4", 422);
/// assert_eq!(err.code(), 422);
/// ```
#[macro_export]
macro_rules! new {
    ($operation:expr, $message:expr $(,)?) => {
        $crate::SeerError::new_at($crate::call_site!(), $operation, $message)
    };
    ($operation:expr, $message:expr, $code:expr $(,)?) => {
        $crate::SeerError::new_at($crate::call_site!(), $operation, $message).with_code($code)
    };
}

/// Wrap an error using the process-wide configuration, recording the
/// enclosing function as the caller. An optional third argument replaces the
/// default message.
#[macro_export]
macro_rules! wrap {
    ($operation:expr, $original:expr $(,)?) => {
        $crate::SeerError::wrap_at($crate::call_site!(), $operation, $original)
    };
    ($operation:expr, $original:expr, $message:expr $(,)?) => {
        $crate::SeerError::wrap_at($crate::call_site!(), $operation, $original)
            .with_message($message)
    };
}

/// Like [`wrap!`], but records provenance even when collection is disabled.
#[macro_export]
macro_rules! wrap_always {
    ($operation:expr, $original:expr $(,)?) => {
        $crate::SeerError::wrap_always_at($crate::call_site!(), $operation, $original)
    };
    ($operation:expr, $original:expr, $message:expr $(,)?) => {
        $crate::SeerError::wrap_always_at($crate::call_site!(), $operation, $original)
            .with_message($message)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(value: i64) -> SeerResult<i64> {
        if value % 2 == 0 {
            return Err(crate::new!("validateInput", format!("even number: {value}")));
        }
        Ok(value)
    }

    #[test]
    fn test_new_macro_records_caller() {
        let err = validate(4).unwrap_err();
        assert_eq!(err.message(), "even number: 4");
        assert_eq!(err.operation(), "validateInput");
        // Unit tests never switch the global collection off
        let provenance = err.provenance().expect("provenance is collected by default");
        assert_eq!(provenance.caller(), "validate");
    }

    #[test]
    fn test_wrap_macros() {
        let err = crate::wrap!("collectInput", std::io::Error::other("eof"), "bad input");
        assert_eq!(err.message(), "bad input");
        assert_eq!(err.raw_error(), "bad input");

        let err = crate::wrap_always!("collectInput", std::io::Error::other("eof"));
        let provenance = err.provenance().unwrap();
        assert_eq!(provenance.caller(), "test_wrap_macros");
        assert!(provenance.file().ends_with("lib.rs"));
    }
}
