//! Diagnostics sink for dependency injection
//!
//! Action handlers never fail towards their caller. Whatever goes wrong
//! is reported here at a [`DebugLevel`] (how likely an operator is to
//! care) and a [`Severity`] (how it is written to the log).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator-facing importance of a diagnostic
///
/// A sink configured with threshold `t` only emits diagnostics whose
/// level is `>= t`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebugLevel {
    Lowest,
    Low,
    Medium,
    High,
    #[default]
    Highest,
}

impl DebugLevel {
    /// Whether a diagnostic at `self` passes `threshold`
    pub fn passes(self, threshold: DebugLevel) -> bool {
        self >= threshold
    }
}

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Severity {
    /// Parse a severity token, case-insensitively
    ///
    /// Accepts both the classic server logger names (`SEVERE`, `WARNING`,
    /// `CONFIG`, `FINE`, `FINER`, `FINEST`, `ALL`) and the usual short forms
    /// (`ERROR`, `WARN`, `DEBUG`, `TRACE`).
    pub fn from_name(name: &str) -> Option<Severity> {
        match name.to_ascii_uppercase().as_str() {
            "SEVERE" | "ERROR" => Some(Severity::Error),
            "WARNING" | "WARN" => Some(Severity::Warning),
            "INFO" | "CONFIG" => Some(Severity::Info),
            "FINE" | "DEBUG" => Some(Severity::Debug),
            "FINER" | "FINEST" | "TRACE" | "ALL" => Some(Severity::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        };
        f.write_str(name)
    }
}

/// Diagnostics interface for dependency injection
pub trait Diagnostics: Send + Sync {
    /// Record a leveled diagnostic about engine behaviour
    fn debug(&self, level: DebugLevel, severity: Severity, message: &str);

    /// Write a line to the plugin log channel (used by the log action)
    fn log(&self, severity: Severity, message: &str);
}

/// No-op diagnostics for testing
#[derive(Debug, Clone, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn debug(&self, _level: DebugLevel, _severity: Severity, _message: &str) {}
    fn log(&self, _severity: Severity, _message: &str) {}
}
