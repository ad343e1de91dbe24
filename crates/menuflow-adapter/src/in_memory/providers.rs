//! In-memory economy and permission providers
//!
//! Both start available. `set_available(false)` simulates a provider that
//! is installed but not hooked.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use menuflow_domain::{Economy, Permissions};
use shared::PlayerId;

use super::{read, write};

/// In-memory economy
#[derive(Debug)]
pub struct InMemoryEconomy {
    available: AtomicBool,
    balances: RwLock<HashMap<PlayerId, f64>>,
}

impl InMemoryEconomy {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            balances: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn balance(&self, player: PlayerId) -> f64 {
        read(&self.balances).get(&player).copied().unwrap_or_default()
    }

    pub fn set_balance(&self, player: PlayerId, amount: f64) {
        write(&self.balances).insert(player, amount);
    }
}

impl Default for InMemoryEconomy {
    fn default() -> Self {
        Self::new()
    }
}

impl Economy for InMemoryEconomy {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn give(&self, player: PlayerId, amount: f64) {
        *write(&self.balances).entry(player).or_default() += amount;
    }

    /// Withdrawals larger than the balance are refused
    fn take(&self, player: PlayerId, amount: f64) {
        let mut balances = write(&self.balances);
        let balance = balances.entry(player).or_default();
        if *balance >= amount {
            *balance -= amount;
        }
    }
}

/// In-memory permission provider
#[derive(Debug)]
pub struct InMemoryPermissions {
    available: AtomicBool,
    nodes: RwLock<HashMap<PlayerId, BTreeSet<String>>>,
}

impl InMemoryPermissions {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            nodes: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn has(&self, player: PlayerId, node: &str) -> bool {
        read(&self.nodes)
            .get(&player)
            .is_some_and(|nodes| nodes.contains(node))
    }
}

impl Default for InMemoryPermissions {
    fn default() -> Self {
        Self::new()
    }
}

impl Permissions for InMemoryPermissions {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn grant(&self, player: PlayerId, node: &str) {
        write(&self.nodes)
            .entry(player)
            .or_default()
            .insert(node.to_string());
    }

    fn revoke(&self, player: PlayerId, node: &str) {
        if let Some(nodes) = write(&self.nodes).get_mut(&player) {
            nodes.remove(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_give_and_take() {
        let economy = InMemoryEconomy::new();
        let player = PlayerId::random();

        economy.give(player, 100.0);
        economy.take(player, 30.5);

        assert_eq!(economy.balance(player), 69.5);
    }

    #[test]
    fn test_overdraw_refused() {
        let economy = InMemoryEconomy::new();
        let player = PlayerId::random();
        economy.set_balance(player, 10.0);

        economy.take(player, 50.0);

        assert_eq!(economy.balance(player), 10.0);
    }

    #[test]
    fn test_grant_and_revoke() {
        let permissions = InMemoryPermissions::new();
        let player = PlayerId::random();

        permissions.grant(player, "shop.vip");
        assert!(permissions.has(player, "shop.vip"));

        permissions.revoke(player, "shop.vip");
        assert!(!permissions.has(player, "shop.vip"));
    }

    #[test]
    fn test_availability_switch() {
        let permissions = InMemoryPermissions::new();
        assert!(permissions.is_available());
        permissions.set_available(false);
        assert!(!permissions.is_available());
    }
}
