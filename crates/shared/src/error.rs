//! Error types for menuflow

use crate::diagnostics::{DebugLevel, Severity};
use thiserror::Error;

/// Broad classification of action failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown menu, unknown sound, or a provider that is not hooked
    UnresolvedReference,
    /// Text that does not parse into what the action needs
    MalformedArgument,
    /// Navigation supplied fewer values than the target declares
    InsufficientArguments,
    /// The running server lacks the capability
    UnsupportedOnPlatform,
    /// The action needs an open menu and there is none
    NoActiveSession,
}

/// A recoverable failure inside one action
///
/// These never escape the dispatcher. Each one is recorded as a
/// diagnostic at [`ActionError::debug_level`] / [`ActionError::severity`]
/// and the action becomes a no-op (or continues with defaults, for the
/// warnings that say so).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Could not find and open menu {0}")]
    UnknownMenu(String),

    #[error("{provider} not hooked! Cannot {operation}!")]
    ProviderUnavailable {
        provider: &'static str,
        operation: String,
    },

    #[error("Sound name given for sound action: {0}, is not a valid sound!")]
    InvalidSound(String),

    #[error("{field} given for {action} action: {value}, is not a valid number!")]
    InvalidNumber {
        action: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Log level {0} is not a valid log level! Using INFO instead.")]
    InvalidLogLevel(String),

    #[error("{0} action requires a non-empty argument")]
    MissingText(&'static str),

    #[error("Arguments were given for menu {0} in action [openmenu], but the menu does not support arguments!")]
    UnexpectedArguments(String),

    #[error("Not enough arguments given for menu {menu} when opening using the [openmenu] action! Expected {expected}, got {given}")]
    InsufficientArguments {
        menu: String,
        expected: usize,
        given: usize,
    },

    #[error("{0} action not supported on this server")]
    Unsupported(&'static str),

    #[error("{0} does not have menu open! Nothing to refresh!")]
    NoActiveSession(String),

    #[error("Invalid meta action! {0}")]
    MetaRejected(&'static str),
}

impl ActionError {
    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::UnknownMenu(_)
            | ActionError::ProviderUnavailable { .. }
            | ActionError::InvalidSound(_) => ErrorKind::UnresolvedReference,
            ActionError::InvalidNumber { .. }
            | ActionError::InvalidLogLevel(_)
            | ActionError::MissingText(_)
            | ActionError::UnexpectedArguments(_)
            | ActionError::MetaRejected(_) => ErrorKind::MalformedArgument,
            ActionError::InsufficientArguments { .. } => ErrorKind::InsufficientArguments,
            ActionError::Unsupported(_) => ErrorKind::UnsupportedOnPlatform,
            ActionError::NoActiveSession(_) => ErrorKind::NoActiveSession,
        }
    }

    /// Debug level the diagnostic is recorded at
    pub fn debug_level(&self) -> DebugLevel {
        match self {
            ActionError::NoActiveSession(_) => DebugLevel::Medium,
            _ => DebugLevel::Highest,
        }
    }

    /// Severity the diagnostic is written with
    pub fn severity(&self) -> Severity {
        match self {
            ActionError::InvalidSound(_) => Severity::Error,
            ActionError::Unsupported(_) | ActionError::MetaRejected(_) => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

/// Error raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy() {
        assert_eq!(
            ActionError::UnknownMenu("shop".into()).kind(),
            ErrorKind::UnresolvedReference
        );
        assert_eq!(
            ActionError::InsufficientArguments {
                menu: "shop".into(),
                expected: 2,
                given: 1
            }
            .kind(),
            ErrorKind::InsufficientArguments
        );
        assert_eq!(
            ActionError::Unsupported("Meta").kind(),
            ErrorKind::UnsupportedOnPlatform
        );
        assert_eq!(
            ActionError::NoActiveSession("Steve".into()).kind(),
            ErrorKind::NoActiveSession
        );
    }

    #[test]
    fn test_refresh_without_menu_is_medium() {
        let err = ActionError::NoActiveSession("Steve".into());
        assert_eq!(err.debug_level(), DebugLevel::Medium);
        assert_eq!(err.to_string(), "Steve does not have menu open! Nothing to refresh!");
    }

    #[test]
    fn test_invalid_number_message() {
        let err = ActionError::InvalidNumber {
            action: "sound",
            field: "Pitch",
            value: "badpitch".into(),
        };
        assert_eq!(
            err.to_string(),
            "Pitch given for sound action: badpitch, is not a valid number!"
        );
        assert_eq!(err.severity(), Severity::Warning);
    }
}
