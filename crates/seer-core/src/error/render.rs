//! Accessors and text renderings for SeerError

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::types::{BoxError, SeerError};
use crate::provenance::Provenance;

impl SeerError {
    /// Label of the step that failed
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// User-facing message; never empty
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Explicit code, or the default code configured at construction
    pub fn code(&self) -> u16 {
        self.code.unwrap_or(self.fallback_code)
    }

    /// Caller, file and line, if they were recorded
    pub fn provenance(&self) -> Option<&Provenance> {
        self.provenance.as_ref()
    }

    /// The wrapped error, if any
    pub fn original(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.original.as_deref()
    }

    /// The message, unless it equals the default message in force at
    /// construction and there is a wrapped error to show instead.
    pub fn raw_error(&self) -> Cow<'_, str> {
        match &self.original {
            Some(original) if self.message == self.default_message => {
                Cow::Owned(original.to_string())
            }
            _ => Cow::Borrowed(&self.message),
        }
    }

    /// One step down the chain.
    ///
    /// Returns the wrapped error and whether it is itself a `SeerError`, so
    /// callers can tell when they have reached a plain leaf error.
    pub fn unwrap_original(&self) -> (Option<&(dyn Error + Send + Sync + 'static)>, bool) {
        match self.original.as_deref() {
            Some(original) => (Some(original), original.is::<SeerError>()),
            None => (None, false),
        }
    }

    /// Take ownership of the wrapped error
    pub fn into_original(self) -> Option<BoxError> {
        self.original
    }

    /// Iterate over the wrapped errors, nearest first
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: self.original.as_deref().map(|e| e as &(dyn Error + 'static)),
        }
    }

    /// Diagnostic line including the message.
    ///
    /// With provenance:
    /// `<file>:<line> (<caller>::<operation>): <message>, original_err=<original>`.
    /// Without: `<operation>: <message>`.
    pub fn detailed_string(&self) -> String {
        let mut out = format!("{}: {}", self.prefix(), self.message);
        if self.provenance.is_some() {
            out.push_str(", original_err=");
            if let Some(original) = &self.original {
                out.push_str(&original.to_string());
            }
        }
        out
    }

    fn prefix(&self) -> Cow<'_, str> {
        match &self.provenance {
            Some(p) => Cow::Owned(format!(
                "{}:{} ({}::{})",
                p.file(),
                p.line(),
                p.caller(),
                self.operation
            )),
            None => Cow::Borrowed(&self.operation),
        }
    }
}

/// Log form: the location prefix, then the wrapped error on its own
/// indented line. The message is left out; see
/// [`SeerError::detailed_string`].
impl fmt::Display for SeerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())?;
        if let Some(original) = &self.original {
            write!(f, "\n\tWrapped error: {original}")?;
        }
        Ok(())
    }
}

impl Error for SeerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.original.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Iterator returned by [`SeerError::chain`]
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
