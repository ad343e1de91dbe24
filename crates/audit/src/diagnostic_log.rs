//! DiagnosticLog - In-memory record of engine diagnostics

use serde::{Deserialize, Serialize};
use shared::{DebugLevel, Diagnostics, Severity};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Recorded diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticEntry {
    pub timestamp: String,
    pub entry_type: EntryType,
    pub level: Option<DebugLevel>,
    pub severity: Severity,
    pub message: String,
}

/// Which channel produced the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Leveled engine diagnostic
    Debug,
    /// Line written by the log action
    Log,
}

/// Bounded diagnostic log
#[derive(Debug)]
pub struct DiagnosticLog {
    entries: Mutex<VecDeque<DiagnosticEntry>>,
    max_entries: usize,
    threshold: DebugLevel,
}

impl DiagnosticLog {
    /// Create a log that records every debug level
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries)),
            max_entries,
            threshold: DebugLevel::Lowest,
        }
    }

    /// Builder: only record debug diagnostics at or above `threshold`
    pub fn with_threshold(mut self, threshold: DebugLevel) -> Self {
        self.threshold = threshold;
        self
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<DiagnosticEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, entry: DiagnosticEntry) {
        let mut entries = self.lock();
        if self.max_entries == 0 {
            return;
        }
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Get recent entries, most recent first
    pub fn get_recent(&self, limit: usize) -> Vec<DiagnosticEntry> {
        self.lock().iter().rev().take(limit).cloned().collect()
    }

    /// Debug diagnostics in recording order
    pub fn debug_entries(&self) -> Vec<DiagnosticEntry> {
        self.lock()
            .iter()
            .filter(|e| e.entry_type == EntryType::Debug)
            .cloned()
            .collect()
    }

    /// Log-action lines in recording order
    pub fn log_entries(&self) -> Vec<DiagnosticEntry> {
        self.lock()
            .iter()
            .filter(|e| e.entry_type == EntryType::Log)
            .cloned()
            .collect()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Get statistics
    pub fn get_stats(&self) -> DiagnosticStats {
        let entries = self.lock();
        let debug = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Debug)
            .count();
        let warnings = entries
            .iter()
            .filter(|e| matches!(e.severity, Severity::Warning | Severity::Error))
            .count();

        DiagnosticStats {
            total_entries: entries.len(),
            debug_count: debug,
            warning_count: warnings,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.lock().iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

impl Diagnostics for DiagnosticLog {
    fn debug(&self, level: DebugLevel, severity: Severity, message: &str) {
        if !level.passes(self.threshold) {
            return;
        }
        self.push(DiagnosticEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            entry_type: EntryType::Debug,
            level: Some(level),
            severity,
            message: message.to_string(),
        });
    }

    fn log(&self, severity: Severity, message: &str) {
        self.push(DiagnosticEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            entry_type: EntryType::Log,
            level: None,
            severity,
            message: message.to_string(),
        });
    }
}

/// Diagnostic statistics
#[derive(Debug, Clone)]
pub struct DiagnosticStats {
    pub total_entries: usize,
    pub debug_count: usize,
    pub warning_count: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new(1000)
    }
}
