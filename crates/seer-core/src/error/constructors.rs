//! Constructor methods for SeerError

use super::types::{BoxError, SeerError};
use crate::config::{self, SeerConfig, validate_code, validate_message};
use crate::provenance::{CallSite, Provenance};

/// When to record provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// Only if the config enables collection
    IfEnabled,
    /// Regardless of the config
    Always,
}

impl SeerConfig {
    fn build(
        &self,
        site: CallSite,
        capture: Capture,
        operation: String,
        message: Option<String>,
        original: Option<BoxError>,
    ) -> SeerError {
        let provenance = match capture {
            Capture::Always => Some(Provenance::capture(site)),
            Capture::IfEnabled if self.collect_provenance() => Some(Provenance::capture(site)),
            Capture::IfEnabled => None,
        };

        let message = match message {
            Some(message) => match validate_message(&message) {
                Ok(()) => message,
                Err(e) => {
                    tracing::warn!(%operation, "Using default message: {}", e);
                    self.default_message().to_string()
                }
            },
            None => self.default_message().to_string(),
        };

        SeerError {
            operation,
            message,
            code: None,
            fallback_code: self.default_code(),
            default_message: self.default_message().to_string(),
            report_provenance: self.collect_provenance(),
            provenance,
            original,
        }
    }

    /// Create an error with no wrapped predecessor
    #[track_caller]
    pub fn new_error(&self, operation: impl Into<String>, message: impl Into<String>) -> SeerError {
        self.new_error_at(CallSite::here(), operation, message)
    }

    /// [`new_error`](Self::new_error) with an explicit call site
    pub fn new_error_at(
        &self,
        site: CallSite,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> SeerError {
        self.build(
            site,
            Capture::IfEnabled,
            operation.into(),
            Some(message.into()),
            None,
        )
    }

    /// Wrap `original`, using the default message
    #[track_caller]
    pub fn wrap(&self, operation: impl Into<String>, original: impl Into<BoxError>) -> SeerError {
        self.wrap_at(CallSite::here(), operation, original)
    }

    /// [`wrap`](Self::wrap) with an explicit call site
    pub fn wrap_at(
        &self,
        site: CallSite,
        operation: impl Into<String>,
        original: impl Into<BoxError>,
    ) -> SeerError {
        self.build(
            site,
            Capture::IfEnabled,
            operation.into(),
            None,
            Some(original.into()),
        )
    }

    /// Wrap `original` and record provenance even if collection is disabled
    #[track_caller]
    pub fn wrap_always(
        &self,
        operation: impl Into<String>,
        original: impl Into<BoxError>,
    ) -> SeerError {
        self.wrap_always_at(CallSite::here(), operation, original)
    }

    /// [`wrap_always`](Self::wrap_always) with an explicit call site
    pub fn wrap_always_at(
        &self,
        site: CallSite,
        operation: impl Into<String>,
        original: impl Into<BoxError>,
    ) -> SeerError {
        self.build(
            site,
            Capture::Always,
            operation.into(),
            None,
            Some(original.into()),
        )
    }
}

impl SeerError {
    /// Create an error using the process-wide configuration
    #[track_caller]
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new_at(CallSite::here(), operation, message)
    }

    /// [`new`](Self::new) with an explicit call site
    pub fn new_at(
        site: CallSite,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        config::current().new_error_at(site, operation, message)
    }

    /// Wrap `original` using the process-wide configuration
    #[track_caller]
    pub fn wrap(operation: impl Into<String>, original: impl Into<BoxError>) -> Self {
        Self::wrap_at(CallSite::here(), operation, original)
    }

    /// [`wrap`](Self::wrap) with an explicit call site
    pub fn wrap_at(
        site: CallSite,
        operation: impl Into<String>,
        original: impl Into<BoxError>,
    ) -> Self {
        config::current().wrap_at(site, operation, original)
    }

    /// Wrap `original`, always recording provenance
    #[track_caller]
    pub fn wrap_always(operation: impl Into<String>, original: impl Into<BoxError>) -> Self {
        Self::wrap_always_at(CallSite::here(), operation, original)
    }

    /// [`wrap_always`](Self::wrap_always) with an explicit call site
    pub fn wrap_always_at(
        site: CallSite,
        operation: impl Into<String>,
        original: impl Into<BoxError>,
    ) -> Self {
        config::current().wrap_always_at(site, operation, original)
    }

    /// Set the code. Codes outside 100..=599 leave the current code in place.
    pub fn with_code(mut self, code: impl Into<i64>) -> Self {
        match validate_code(code) {
            Ok(code) => self.code = Some(code),
            Err(e) => tracing::warn!(
                operation = %self.operation,
                current = self.code(),
                "Ignoring error code: {}",
                e
            ),
        }
        self
    }

    /// Replace the message. Blank messages are ignored.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        match validate_message(&message) {
            Ok(()) => self.message = message,
            Err(e) => tracing::warn!(operation = %self.operation, "Ignoring message: {}", e),
        }
        self
    }
}
