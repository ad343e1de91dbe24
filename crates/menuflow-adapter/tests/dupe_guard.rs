//! Menu-item sweeps over the in-memory server

use menuflow_adapter::in_memory::DroppedItem;
use menuflow_adapter::InMemoryBackend;
use menuflow_domain::{ItemMarker, ItemStack, OnlinePlayer};
use shared::{DebugLevel, EngineConfig};

fn backend() -> InMemoryBackend {
    InMemoryBackend::new(EngineConfig {
        debug_level: DebugLevel::Lowest,
        ..EngineConfig::default()
    })
}

fn menu_item(backend: &InMemoryBackend) -> ItemStack {
    let mut item = ItemStack::new("DIAMOND", 1);
    backend.marker.mark(&mut item);
    item
}

#[test]
fn test_close_strips_contents_and_off_hand() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let steve = backend.server.join("Steve", "world");
    steve.give_item(menu_item(&backend));
    steve.give_item(ItemStack::new("BREAD", 3));
    steve.set_off_hand(Some(menu_item(&backend)));

    guard.on_inventory_close(steve.id());

    // the sweep waits for the close to finish
    assert_eq!(steve.inventory().items().count(), 2);

    backend.scheduler.tick();

    let inventory = steve.inventory();
    let remaining: Vec<_> = inventory.items().map(|i| i.material.as_str()).collect();
    assert_eq!(remaining, vec!["BREAD"]);
    assert!(inventory.off_hand.is_none());
    assert_eq!(steve.state().inventory_updates, 1);
    assert_eq!(backend.log.debug_entries().len(), 2);
}

#[test]
fn test_close_without_menu_items_sends_no_update() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let steve = backend.server.join("Steve", "world");
    steve.give_item(ItemStack::new("BREAD", 3));

    guard.on_inventory_close(steve.id());
    backend.scheduler.tick();

    assert_eq!(steve.inventory().items().count(), 1);
    assert_eq!(steve.state().inventory_updates, 0);
    assert!(backend.log.debug_entries().is_empty());
}

#[test]
fn test_close_sweep_dropped_when_player_leaves() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let steve = backend.server.join("Steve", "world");
    steve.give_item(menu_item(&backend));

    guard.on_inventory_close(steve.id());
    backend.quit(steve.id());

    assert_eq!(backend.scheduler.tick(), 0);
    assert_eq!(steve.state().inventory_updates, 0);
}

#[test]
fn test_login_sweep_after_delay() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let steve = backend.server.join("Steve", "world");
    steve.give_item(menu_item(&backend));
    steve.set_off_hand(Some(menu_item(&backend)));

    guard.on_login(steve.id());

    backend.scheduler.advance(9);
    assert_eq!(steve.inventory().items().count(), 1);

    backend.scheduler.tick();
    let inventory = steve.inventory();
    assert_eq!(inventory.items().count(), 0);
    // login only looks at storage slots and does not re-send the view
    assert!(inventory.off_hand.is_some());
    assert_eq!(steve.state().inventory_updates, 0);
}

#[test]
fn test_login_delay_follows_config() {
    let backend = InMemoryBackend::new(EngineConfig {
        login_cleanup_delay_ticks: 2,
        ..EngineConfig::default()
    });
    let steve = backend.server.join("Steve", "world");
    steve.give_item(menu_item(&backend));

    backend.dupe_guard().on_login(steve.id());
    backend.scheduler.advance(2);

    assert_eq!(steve.inventory().items().count(), 0);
}

#[test]
fn test_pickup_and_drop_remove_at_once() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let picked = DroppedItem::new(menu_item(&backend));
    let dropped = DroppedItem::new(menu_item(&backend));

    assert!(guard.on_pickup(&picked));
    assert!(guard.on_drop(&dropped));

    assert!(picked.is_removed());
    assert!(dropped.is_removed());
    assert_eq!(backend.scheduler.pending(), 0);
    assert_eq!(backend.log.debug_entries().len(), 2);
}

#[test]
fn test_ordinary_items_are_left_alone() {
    let backend = backend();
    let guard = backend.dupe_guard();
    let bread = DroppedItem::new(ItemStack::new("BREAD", 1));
    let lookalike = DroppedItem::new(
        ItemStack::new("DIAMOND", 1).with_data(backend.marker.key(), "false"),
    );

    assert!(!guard.on_pickup(&bread));
    assert!(!guard.on_drop(&lookalike));
    assert!(!bread.is_removed());
    assert!(!lookalike.is_removed());
}
