//! Core error type for seer

use crate::provenance::Provenance;

/// Any error that can be wrapped
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for operations that fail with a [`SeerError`]
pub type SeerResult<T> = Result<T, SeerError>;

/// An error annotated with the operation that failed.
///
/// Built with [`SeerError::new`], [`SeerError::wrap`] or
/// [`SeerError::wrap_always`] (or the `new!`/`wrap!`/`wrap_always!` macros,
/// which name the calling function at compile time), then adjusted with
/// [`with_code`](SeerError::with_code) and
/// [`with_message`](SeerError::with_message) before being returned.
///
/// Defaults are read from the configuration once, at construction, so later
/// configuration changes do not alter an existing value.
///
/// The JSON form produced by [`to_json`](SeerError::to_json) and the
/// `Serialize` impl is write-only: there is no way to rebuild a `SeerError`
/// from it.
#[derive(Debug)]
pub struct SeerError {
    pub(super) operation: String,
    pub(super) message: String,
    /// Explicit code; `None` falls back to `fallback_code`
    pub(super) code: Option<u16>,
    pub(super) fallback_code: u16,
    /// Default message in force at construction
    pub(super) default_message: String,
    /// Provenance collection was enabled when this value was built
    pub(super) report_provenance: bool,
    pub(super) provenance: Option<Provenance>,
    pub(super) original: Option<BoxError>,
}
