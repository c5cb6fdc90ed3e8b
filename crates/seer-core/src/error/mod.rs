//! Annotated errors
//!
//! This module provides [`SeerError`], an error value that labels an
//! underlying failure with:
//! - operation: the logical step that failed
//! - message: text that is safe to show to a user
//! - code: a status code in 100..=599
//! - provenance: caller, file and line, when collection is enabled
//! - original: the error being wrapped, if any

mod constructors;
mod context;
mod json;
mod render;
mod types;

// Re-export all public types and traits
pub use context::{OptionExt, ResultExt};
pub use render::Chain;
pub use types::{BoxError, SeerError, SeerResult};
