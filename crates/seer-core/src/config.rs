//! Construction defaults
//!
//! A [`SeerConfig`] carries the values every constructor reads: the fallback
//! message, the fallback code and whether call-site provenance is collected.
//! Callers can own a config and build errors through it, or rely on the
//! process-wide instance managed by [`current`], [`install`] and the `set_*`
//! functions in this module.
//!
//! Invalid input to the setters never fails the caller. It is dropped and a
//! warning is logged, so the stored configuration is always valid.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a constructor is not given one
pub const DEFAULT_MESSAGE: &str = "an error occurred";

/// Code reported by errors that were never given a valid one
pub const DEFAULT_CODE: u16 = 500;

/// Smallest accepted error code
pub const MIN_CODE: u16 = 100;

/// Largest accepted error code
pub const MAX_CODE: u16 = 599;

/// Rejected configuration input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Code outside `MIN_CODE..=MAX_CODE`
    #[error("invalid error code {code}: expected a value between {min} and {max}", min = MIN_CODE, max = MAX_CODE)]
    InvalidCode { code: i64 },

    /// Empty or whitespace-only message
    #[error("message must not be blank")]
    BlankMessage,
}

/// Check that `code` lies in the accepted range and narrow it.
pub fn validate_code(code: impl Into<i64>) -> Result<u16, ConfigError> {
    let code = code.into();
    match u16::try_from(code) {
        Ok(narrow) if (MIN_CODE..=MAX_CODE).contains(&narrow) => Ok(narrow),
        _ => Err(ConfigError::InvalidCode { code }),
    }
}

/// Check that `message` has visible content.
pub fn validate_message(message: &str) -> Result<(), ConfigError> {
    if message.trim().is_empty() {
        Err(ConfigError::BlankMessage)
    } else {
        Ok(())
    }
}

/// Defaults applied when constructing errors.
///
/// Deserializing a `SeerConfig` validates it, so a config embedded in an
/// application settings file is rejected rather than silently corrected:
///
/// ```
/// use seer_core::SeerConfig;
///
/// let config: SeerConfig =
///     serde_json::from_str(r#"{ "default_code": 422, "collect_provenance": false }"#).unwrap();
/// assert_eq!(config.default_code(), 422);
/// assert_eq!(config.default_message(), "an error occurred");
///
/// assert!(serde_json::from_str::<SeerConfig>(r#"{ "default_code": 42 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeerConfigFile")]
pub struct SeerConfig {
    default_message: String,
    default_code: u16,
    collect_provenance: bool,
}

impl Default for SeerConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_string(),
            default_code: DEFAULT_CODE,
            collect_provenance: true,
        }
    }
}

impl SeerConfig {
    /// Create a config with the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from explicit values, rejecting invalid ones
    pub fn try_new(
        default_message: impl Into<String>,
        default_code: impl Into<i64>,
        collect_provenance: bool,
    ) -> Result<Self, ConfigError> {
        let default_message = default_message.into();
        validate_message(&default_message)?;
        let default_code = validate_code(default_code)?;
        Ok(Self {
            default_message,
            default_code,
            collect_provenance,
        })
    }

    /// Message substituted when none is supplied
    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// Code reported by errors without an explicit one
    pub fn default_code(&self) -> u16 {
        self.default_code
    }

    /// Whether constructors record caller, file and line
    pub fn collect_provenance(&self) -> bool {
        self.collect_provenance
    }

    /// Replace the default message. Blank messages are ignored.
    pub fn set_default_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        match validate_message(&message) {
            Ok(()) => self.default_message = message,
            Err(e) => warn_ignored_message(&e, &self.default_message),
        }
    }

    /// Replace the default code. Codes outside 100..=599 are ignored.
    pub fn set_default_code(&mut self, code: impl Into<i64>) {
        match validate_code(code) {
            Ok(code) => self.default_code = code,
            Err(e) => warn_ignored_code(&e, self.default_code),
        }
    }

    /// Toggle provenance collection for future constructions
    pub fn set_collect_provenance(&mut self, flag: bool) {
        self.collect_provenance = flag;
    }

    /// Builder form of [`set_default_message`](Self::set_default_message)
    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.set_default_message(message);
        self
    }

    /// Builder form of [`set_default_code`](Self::set_default_code)
    pub fn with_default_code(mut self, code: impl Into<i64>) -> Self {
        self.set_default_code(code);
        self
    }

    /// Builder form of [`set_collect_provenance`](Self::set_collect_provenance)
    pub fn with_collect_provenance(mut self, flag: bool) -> Self {
        self.set_collect_provenance(flag);
        self
    }
}

/// On-disk shape of [`SeerConfig`]; missing keys take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct SeerConfigFile {
    default_message: String,
    default_code: i64,
    collect_provenance: bool,
}

impl Default for SeerConfigFile {
    fn default() -> Self {
        let SeerConfig {
            default_message,
            default_code,
            collect_provenance,
        } = SeerConfig::default();
        Self {
            default_message,
            default_code: i64::from(default_code),
            collect_provenance,
        }
    }
}

impl TryFrom<SeerConfigFile> for SeerConfig {
    type Error = ConfigError;

    fn try_from(file: SeerConfigFile) -> Result<Self, Self::Error> {
        Self::try_new(
            file.default_message,
            file.default_code,
            file.collect_provenance,
        )
    }
}

/// Process-wide configuration
static GLOBAL_CONFIG: Lazy<RwLock<SeerConfig>> = Lazy::new(|| RwLock::new(SeerConfig::default()));

fn warn_ignored_message(e: &ConfigError, current: &str) {
    tracing::warn!(current = %current, "Ignoring default message: {}", e);
}

fn warn_ignored_code(e: &ConfigError, current: u16) {
    tracing::warn!(current, "Ignoring default code: {}", e);
}

/// Snapshot of the process-wide configuration.
///
/// The lock is released before this returns, so code running inside a
/// tracing subscriber may construct errors or change the configuration.
pub fn current() -> SeerConfig {
    GLOBAL_CONFIG.read().clone()
}

/// Replace the process-wide configuration, returning the previous one
pub fn install(config: SeerConfig) -> SeerConfig {
    std::mem::replace(&mut *GLOBAL_CONFIG.write(), config)
}

/// Restore the built-in defaults
pub fn reset() {
    install(SeerConfig::default());
}

/// Current process-wide default message
pub fn default_message() -> String {
    GLOBAL_CONFIG.read().default_message.clone()
}

// The global setters validate and log before taking the write lock; a
// subscriber may call back into this module while handling the warning.

/// Set the process-wide default message. Blank messages are ignored.
pub fn set_default_message(message: impl Into<String>) {
    let message = message.into();
    match validate_message(&message) {
        Ok(()) => GLOBAL_CONFIG.write().default_message = message,
        Err(e) => warn_ignored_message(&e, &default_message()),
    }
}

/// Set the process-wide default code. Codes outside 100..=599 are ignored.
pub fn set_default_code(code: impl Into<i64>) {
    match validate_code(code) {
        Ok(code) => GLOBAL_CONFIG.write().default_code = code,
        Err(e) => {
            let current = GLOBAL_CONFIG.read().default_code;
            warn_ignored_code(&e, current);
        }
    }
}

/// Toggle process-wide provenance collection
pub fn set_collect_provenance(flag: bool) {
    GLOBAL_CONFIG.write().set_collect_provenance(flag);
}
