//! InMemoryBackend - Everything wired together
//!
//! Owns one of each in-memory adapter and hands out the domain services
//! built on them. The concrete handles stay public so callers can drive
//! the world (join players, tick the scheduler) and inspect it afterwards.

use std::sync::Arc;

use audit::DiagnosticLog;
use menuflow_domain::{
    ActionDispatcher, ActionPorts, CleanupDelays, DataKeyMarker, DupeGuard, Economy, MetaHandler,
    Permissions,
};
use shared::{DebugLevel, Diagnostics, EngineConfig, PlayerId, Severity};
use tracing::info;

use crate::in_memory::{
    ArgumentTextResolver, InMemoryEconomy, InMemoryMenus, InMemoryMetaStore,
    InMemoryPermissions, InMemoryServer, StaticSoundRegistry, TickScheduler,
};

/// In-memory server, menus, providers and scheduler
pub struct InMemoryBackend {
    pub config: EngineConfig,
    pub server: Arc<InMemoryServer>,
    pub menus: Arc<InMemoryMenus>,
    pub sounds: Arc<StaticSoundRegistry>,
    pub text: Arc<ArgumentTextResolver>,
    pub scheduler: Arc<TickScheduler>,
    pub economy: Arc<InMemoryEconomy>,
    pub permissions: Arc<InMemoryPermissions>,
    pub meta: Arc<InMemoryMetaStore>,
    pub marker: Arc<DataKeyMarker>,
    /// Records at `config.debug_level`, whatever sink is installed
    pub log: Arc<DiagnosticLog>,
    sink: Arc<dyn Diagnostics>,
}

impl InMemoryBackend {
    pub fn new(config: EngineConfig) -> Self {
        let log = Arc::new(
            DiagnosticLog::new(config.diagnostic_capacity).with_threshold(config.debug_level),
        );
        Self {
            server: Arc::new(InMemoryServer::new()),
            menus: Arc::new(InMemoryMenus::new()),
            sounds: Arc::new(StaticSoundRegistry::default()),
            text: Arc::new(ArgumentTextResolver::new()),
            scheduler: Arc::new(TickScheduler::new()),
            economy: Arc::new(InMemoryEconomy::new()),
            permissions: Arc::new(InMemoryPermissions::new()),
            meta: Arc::new(InMemoryMetaStore::new()),
            marker: Arc::new(DataKeyMarker::new(config.marker_key.clone())),
            sink: Arc::clone(&log) as Arc<dyn Diagnostics>,
            log,
            config,
        }
    }

    /// Builder: also forward diagnostics to `sink`
    pub fn with_diagnostics(mut self, sink: Arc<dyn Diagnostics>) -> Self {
        self.sink = Arc::new(Fanout {
            log: Arc::clone(&self.log),
            sink,
        });
        self
    }

    /// Diagnostics as the services see them
    pub fn diagnostics(&self) -> Arc<dyn Diagnostics> {
        Arc::clone(&self.sink)
    }

    /// Port bundle with every optional provider present
    pub fn ports(&self) -> ActionPorts {
        ActionPorts {
            server: self.server.clone(),
            menus: self.menus.clone(),
            sounds: self.sounds.clone(),
            text: self.text.clone(),
            scheduler: self.scheduler.clone(),
            economy: Some(self.economy.clone() as Arc<dyn Economy>),
            permissions: Some(self.permissions.clone() as Arc<dyn Permissions>),
            meta: Some(self.meta.clone() as Arc<dyn MetaHandler>),
        }
    }

    pub fn dispatcher(&self) -> Arc<ActionDispatcher> {
        Arc::new(ActionDispatcher::new(self.ports(), self.diagnostics()))
    }

    pub fn dupe_guard(&self) -> DupeGuard {
        DupeGuard::new(
            self.server.clone(),
            self.scheduler.clone(),
            self.marker.clone(),
            self.diagnostics(),
        )
        .with_delays(CleanupDelays::from(&self.config))
    }

    /// Disconnect a player and end their scheduler timeline
    pub fn quit(&self, player: PlayerId) {
        if self.server.quit(player).is_some() {
            let retired = self.scheduler.retire_for(player);
            info!(%player, retired, "Player disconnected");
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Records into the log, then forwards
struct Fanout {
    log: Arc<DiagnosticLog>,
    sink: Arc<dyn Diagnostics>,
}

impl Diagnostics for Fanout {
    fn debug(&self, level: DebugLevel, severity: Severity, message: &str) {
        self.log.debug(level, severity, message);
        self.sink.debug(level, severity, message);
    }

    fn log(&self, severity: Severity, message: &str) {
        self.log.log(severity, message);
        self.sink.log(severity, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuflow_domain::{ActionKind, OnlinePlayer};

    #[test]
    fn test_log_records_with_extra_sink() {
        let extra = Arc::new(DiagnosticLog::new(10));
        let backend = InMemoryBackend::default().with_diagnostics(extra.clone());
        let steve = backend.server.join("Steve", "world");

        backend
            .dispatcher()
            .execute(steve.as_ref(), ActionKind::GiveMoney, "lots", None);

        assert_eq!(backend.log.get_stats().total_entries, 1);
        assert_eq!(extra.get_stats().total_entries, 1);
    }

    #[test]
    fn test_quit_retires_player_tasks() {
        let backend = InMemoryBackend::default();
        let steve = backend.server.join("Steve", "world");
        backend.dupe_guard().on_inventory_close(steve.id());
        assert_eq!(backend.scheduler.pending(), 1);

        backend.quit(steve.id());

        assert_eq!(backend.scheduler.pending(), 0);
        assert!(backend.server.get(steve.id()).is_none());
    }

    #[test]
    fn test_log_honours_debug_level() {
        let backend = InMemoryBackend::default();
        let steve = backend.server.join("Steve", "world");

        // NoActiveSession is a MEDIUM diagnostic; the default level is HIGHEST
        backend
            .dispatcher()
            .execute(steve.as_ref(), ActionKind::Refresh, "", None);

        assert_eq!(backend.log.get_stats().total_entries, 0);
    }

    #[test]
    fn test_marker_follows_config() {
        let config = EngineConfig {
            marker_key: "shop:menu".to_string(),
            ..EngineConfig::default()
        };
        let backend = InMemoryBackend::new(config);
        assert_eq!(backend.marker.key(), "shop:menu");
    }
}
