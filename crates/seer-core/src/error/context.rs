//! Extension traits for turning results and options into SeerError

use super::types::{BoxError, SeerError, SeerResult};

/// Extension trait for wrapping the error of a `Result`
pub trait ResultExt<T> {
    /// Wrap the error with an operation label and the default message
    fn wrap_err(self, operation: impl Into<String>) -> SeerResult<T>;

    /// Wrap the error with an operation label and a message
    fn wrap_err_msg(self, operation: impl Into<String>, message: impl Into<String>)
    -> SeerResult<T>;

    /// Wrap the error, building the message only on failure
    fn wrap_err_with<M, F>(self, operation: impl Into<String>, f: F) -> SeerResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn wrap_err(self, operation: impl Into<String>) -> SeerResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(SeerError::wrap(operation, e)),
        }
    }

    #[track_caller]
    fn wrap_err_msg(
        self,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> SeerResult<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(SeerError::wrap(operation, e).with_message(message)),
        }
    }

    #[track_caller]
    fn wrap_err_with<M, F>(self, operation: impl Into<String>, f: F) -> SeerResult<T>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(SeerError::wrap(operation, e).with_message(f())),
        }
    }
}

/// Extension trait for converting a missing value into a SeerError
pub trait OptionExt<T> {
    /// Convert `None` into a new error with the given operation and message
    fn ok_or_seer(self, operation: impl Into<String>, message: impl Into<String>)
    -> SeerResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_seer(
        self,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> SeerResult<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(SeerError::new(operation, message)),
        }
    }
}
