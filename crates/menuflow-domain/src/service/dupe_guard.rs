//! DupeGuard - Keeps menu items out of real inventories
//!
//! Menu items are marked when a menu renders them. Whenever one could have
//! escaped (its menu closed, the player logged in carrying it, it hit
//! the ground) the guard strips it:
//!
//! - inventory close: entity task after `close_ticks`, contents + off-hand,
//!   one inventory re-send if anything went
//! - login: global task after `login_ticks`, contents
//! - pickup / drop: immediately, the world entity is removed
//!
//! The close sweep waits a tick so the menu's own close handling finishes
//! mutating the inventory first.

use std::sync::Arc;

use crate::model::item::ItemMarker;
use crate::port::scheduler::Scheduler;
use crate::port::server::{Server, WorldItem};
use shared::{DebugLevel, Diagnostics, EngineConfig, PlayerId, Severity};

/// Delays of the deferred sweeps, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupDelays {
    pub close_ticks: u64,
    pub login_ticks: u64,
}

impl Default for CleanupDelays {
    fn default() -> Self {
        Self {
            close_ticks: 1,
            login_ticks: 10,
        }
    }
}

impl From<&EngineConfig> for CleanupDelays {
    fn from(config: &EngineConfig) -> Self {
        Self {
            close_ticks: config.close_cleanup_delay_ticks,
            login_ticks: config.login_cleanup_delay_ticks,
        }
    }
}

/// Reacts to inventory lifecycle events
#[derive(Clone)]
pub struct DupeGuard {
    server: Arc<dyn Server>,
    scheduler: Arc<dyn Scheduler>,
    marker: Arc<dyn ItemMarker>,
    diagnostics: Arc<dyn Diagnostics>,
    delays: CleanupDelays,
}

impl DupeGuard {
    pub fn new(
        server: Arc<dyn Server>,
        scheduler: Arc<dyn Scheduler>,
        marker: Arc<dyn ItemMarker>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            server,
            scheduler,
            marker,
            diagnostics,
            delays: CleanupDelays::default(),
        }
    }

    /// Builder: override the sweep delays
    pub fn with_delays(mut self, delays: CleanupDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn delays(&self) -> CleanupDelays {
        self.delays
    }

    fn report(&self, message: &str) {
        self.diagnostics
            .debug(DebugLevel::Lowest, Severity::Info, message);
    }

    /// A player closed an inventory view
    pub fn on_inventory_close(&self, player: PlayerId) {
        let guard = self.clone();
        self.scheduler.run_later_for(
            player,
            Box::new(move || {
                guard.sweep_after_close(player);
            }),
            self.delays.close_ticks,
        );
    }

    /// A player logged in
    pub fn on_login(&self, player: PlayerId) {
        let guard = self.clone();
        self.scheduler.run_later(
            Box::new(move || {
                guard.sweep_after_login(player);
            }),
            self.delays.login_ticks,
        );
    }

    /// An entity picked an item up
    ///
    /// Returns `true` when the item was a menu item and its entity has been
    /// removed; the caller should skip the pickup.
    pub fn on_pickup(&self, item: &dyn WorldItem) -> bool {
        if !self.marker.is_marked(item.stack()) {
            return false;
        }
        self.report("Someone picked up a menu item. Removing it.");
        item.remove();
        true
    }

    /// A player dropped an item
    ///
    /// Returns `true` when the dropped entity was a menu item and has been
    /// removed.
    pub fn on_drop(&self, item: &dyn WorldItem) -> bool {
        if !self.marker.is_marked(item.stack()) {
            return false;
        }
        self.report("A menu item was dropped in the world. Removing it.");
        item.remove();
        true
    }

    fn sweep_after_close(&self, player: PlayerId) -> usize {
        let Some(online) = self.server.player(player) else {
            return 0;
        };

        let mut inventory = online.inventory();
        let mut removed = inventory.remove_matching(|item| self.marker.is_marked(item));
        for _ in 0..removed {
            self.report("Menu item found in main inventory on close. Removing it.");
        }

        if inventory
            .off_hand
            .as_ref()
            .is_some_and(|item| self.marker.is_marked(item))
        {
            inventory.off_hand = None;
            removed += 1;
            self.report("Menu item found in offhand on close. Removing it.");
        }

        if removed > 0 {
            online.set_inventory(inventory);
            online.update_inventory();
        }
        removed
    }

    fn sweep_after_login(&self, player: PlayerId) -> usize {
        let Some(online) = self.server.player(player) else {
            return 0;
        };

        let mut inventory = online.inventory();
        let removed = inventory.remove_matching(|item| self.marker.is_marked(item));
        for _ in 0..removed {
            self.report("Player logged in with a menu item in their inventory. Removing it.");
        }

        if removed > 0 {
            online.set_inventory(inventory);
        }
        removed
    }
}
