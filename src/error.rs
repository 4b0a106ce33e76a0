//! Error types for the command help responder.
//!
//! Construction of the command index is the only fallible step of the
//! responder itself. Handling a help event never fails.

use thiserror::Error;

// ============================================================================
// Construction Errors (plugin set validation)
// ============================================================================

/// Errors raised while building a [`CommandIndex`](crate::index::CommandIndex)
/// from the configured plugin set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The `plugins` value is not a list.
    #[error("configuration \"plugins\" key must reference an array, got {found}")]
    NonArray { found: String },

    /// At least one element of `plugins` does not implement the plugin
    /// capability (a subscribed-events mapping).
    #[error(
        "all configuration \"plugins\" values must be plugins, element {index} is {found}"
    )]
    NonPlugin { index: usize, found: String },
}

impl ConfigError {
    /// Get a static error code string for logging and exit reporting.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonArray { .. } => "plugins_non_array",
            Self::NonPlugin { .. } => "plugins_non_plugin",
        }
    }
}

// ============================================================================
// Load Errors (configuration file)
// ============================================================================

/// Errors raised while reading the configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Plugins(#[from] ConfigError),
}

impl LoadError {
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "config_io",
            Self::Parse(_) => "config_parse",
            Self::Plugins(e) => e.error_code(),
        }
    }
}

// ============================================================================
// Event Errors (host-side event construction)
// ============================================================================

/// Errors raised by the host when turning raw input into a help event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The originating protocol command has no outbound counterpart.
    #[error("unsupported protocol command: {0}")]
    UnsupportedCommand(String),

    #[error("command event has no response target")]
    NoTarget,
}

impl EventError {
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedCommand(_) => "unsupported_command",
            Self::NoTarget => "no_target",
        }
    }
}
