//! Configuration types for menuflow

use crate::diagnostics::DebugLevel;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration (`menuflow.yml` / `menuflow.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Minimum level a diagnostic needs to be emitted
    pub debug_level: DebugLevel,

    /// Ticks between an inventory close and the marked-item sweep
    pub close_cleanup_delay_ticks: u64,

    /// Ticks between a login and the marked-item sweep
    pub login_cleanup_delay_ticks: u64,

    /// Data key that marks an item as menu-owned
    pub marker_key: String,

    /// Number of diagnostics kept in memory
    pub diagnostic_capacity: usize,

    /// Wall-clock length of one tick, in milliseconds
    pub tick_millis: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug_level: DebugLevel::Highest,
            close_cleanup_delay_ticks: 1,
            login_cleanup_delay_ticks: 10,
            marker_key: "menuflow:menu_item".to_string(),
            diagnostic_capacity: 1000,
            tick_millis: 50,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: EngineConfig = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yml" | "yaml" => serde_yaml::from_str(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive the engine
    pub fn validate(&self) -> crate::Result<()> {
        if self.tick_millis == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tickMillis",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
