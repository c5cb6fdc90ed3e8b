//! Seer
//!
//! Annotated, chainable errors with call-site provenance and a JSON form for
//! log sinks. This crate re-exports [`seer_core`]; see its documentation for
//! the full API.
//!
//! ```
//! fn parse_odd(input: &str) -> seer::SeerResult<i64> {
//!     use seer::ResultExt;
//!
//!     let value = input.trim().parse::<i64>().wrap_err("collectInput")?;
//!     if value % 2 == 0 {
//!         return Err(seer::new!("validateInput", format!("even number: {value}")));
//!     }
//!     Ok(value)
//! }
//!
//! assert_eq!(parse_odd("7").unwrap(), 7);
//! assert_eq!(parse_odd("8").unwrap_err().message(), "even number: 8");
//! ```

pub use seer_core::config;
pub use seer_core::error;
pub use seer_core::provenance;

pub use seer_core::{
    BoxError, CallSite, Chain, ConfigError, OptionExt, Provenance, ResultExt, SeerConfig,
    SeerError, SeerResult, set_collect_provenance, set_default_code, set_default_message,
};

pub use seer_core::{call_site, function_name, new, wrap, wrap_always};
