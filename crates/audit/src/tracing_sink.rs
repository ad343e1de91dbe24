//! TracingDiagnostics - Forward diagnostics to `tracing`

use shared::{DebugLevel, Diagnostics, Severity};

/// Diagnostics sink that emits `tracing` events
///
/// Leveled diagnostics go to the `menuflow::debug` target and are
/// filtered by the configured debug threshold. Log-action lines go to
/// `menuflow::log` unfiltered.
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    threshold: DebugLevel,
}

impl TracingDiagnostics {
    pub fn new(threshold: DebugLevel) -> Self {
        Self { threshold }
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::new(DebugLevel::default())
    }
}

macro_rules! emit {
    ($severity:expr, $target:literal, $($arg:tt)+) => {
        match $severity {
            Severity::Error => tracing::error!(target: $target, $($arg)+),
            Severity::Warning => tracing::warn!(target: $target, $($arg)+),
            Severity::Info => tracing::info!(target: $target, $($arg)+),
            Severity::Debug => tracing::debug!(target: $target, $($arg)+),
            Severity::Trace => tracing::trace!(target: $target, $($arg)+),
        }
    };
}

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, level: DebugLevel, severity: Severity, message: &str) {
        if !level.passes(self.threshold) {
            return;
        }
        emit!(severity, "menuflow::debug", level = ?level, "{}", message);
    }

    fn log(&self, severity: Severity, message: &str) {
        emit!(severity, "menuflow::log", "{}", message);
    }
}
