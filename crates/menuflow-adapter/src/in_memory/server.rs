//! In-memory server and players

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use menuflow_domain::{
    ExpUnit, ExperienceChange, Inventory, ItemStack, Message, OnlinePlayer, Server, Sound,
    WorldItem,
};
use shared::PlayerId;

use super::{read, write};

/// A sound a player heard
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSound {
    pub sound: Sound,
    pub volume: f32,
    pub pitch: f32,
}

/// Everything observable about an in-memory player
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Chat lines and `/commands` sent as the player
    pub chat: Vec<String>,
    pub messages: Vec<Message>,
    pub sounds: Vec<PlayedSound>,
    pub exp_points: i32,
    pub exp_levels: i32,
    pub inventory: Inventory,
    /// How often the inventory view was re-sent
    pub inventory_updates: usize,
}

/// In-memory player
#[derive(Debug)]
pub struct InMemoryPlayer {
    id: PlayerId,
    name: String,
    world: RwLock<String>,
    state: RwLock<PlayerState>,
}

impl InMemoryPlayer {
    pub fn new(name: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            id: PlayerId::random(),
            name: name.into(),
            world: RwLock::new(world.into()),
            state: RwLock::new(PlayerState {
                inventory: Inventory::new(),
                ..PlayerState::default()
            }),
        }
    }

    /// Snapshot of the player's observable state
    pub fn state(&self) -> PlayerState {
        read(&self.state).clone()
    }

    pub fn set_world(&self, world: impl Into<String>) {
        *write(&self.world) = world.into();
    }

    /// Put an item in the first free slot; returns the slot
    pub fn give_item(&self, item: ItemStack) -> Option<usize> {
        write(&self.state).inventory.add(item)
    }

    pub fn set_off_hand(&self, item: Option<ItemStack>) {
        write(&self.state).inventory.off_hand = item;
    }
}

impl OnlinePlayer for InMemoryPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn world(&self) -> String {
        read(&self.world).clone()
    }

    fn chat(&self, text: &str) {
        write(&self.state).chat.push(text.to_string());
    }

    fn send_message(&self, message: &Message) {
        write(&self.state).messages.push(message.clone());
    }

    fn play_sound(&self, sound: &Sound, volume: f32, pitch: f32) {
        write(&self.state).sounds.push(PlayedSound {
            sound: sound.clone(),
            volume,
            pitch,
        });
    }

    /// Levels and points are tracked separately and never drop below zero
    fn apply_experience(&self, change: ExperienceChange) {
        let mut state = write(&self.state);
        let counter = match change.unit {
            ExpUnit::Points => &mut state.exp_points,
            ExpUnit::Levels => &mut state.exp_levels,
        };
        *counter = counter.saturating_add(change.amount).max(0);
    }

    fn inventory(&self) -> Inventory {
        read(&self.state).inventory.clone()
    }

    fn set_inventory(&self, inventory: Inventory) {
        write(&self.state).inventory = inventory;
    }

    fn update_inventory(&self) {
        write(&self.state).inventory_updates += 1;
    }
}

/// An item entity lying in the world
#[derive(Debug)]
pub struct DroppedItem {
    stack: ItemStack,
    removed: AtomicBool,
}

impl DroppedItem {
    pub fn new(stack: ItemStack) -> Self {
        Self {
            stack,
            removed: AtomicBool::new(false),
        }
    }

    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::SeqCst)
    }
}

impl WorldItem for DroppedItem {
    fn stack(&self) -> &ItemStack {
        &self.stack
    }

    fn remove(&self) {
        self.removed.store(true, Ordering::SeqCst);
    }
}

/// In-memory server
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Default)]
pub struct InMemoryServer {
    players: RwLock<HashMap<PlayerId, Arc<InMemoryPlayer>>>,
    console: RwLock<Vec<String>>,
    broadcasts: RwLock<Vec<Message>>,
    transfers: RwLock<Vec<(PlayerId, String)>>,
}

impl InMemoryServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a new player
    pub fn join(&self, name: impl Into<String>, world: impl Into<String>) -> Arc<InMemoryPlayer> {
        let player = Arc::new(InMemoryPlayer::new(name, world));
        write(&self.players).insert(player.id(), Arc::clone(&player));
        player
    }

    /// Disconnect a player
    pub fn quit(&self, id: PlayerId) -> Option<Arc<InMemoryPlayer>> {
        write(&self.players).remove(&id)
    }

    /// Concrete handle, for inspection
    pub fn get(&self, id: PlayerId) -> Option<Arc<InMemoryPlayer>> {
        read(&self.players).get(&id).cloned()
    }

    /// Console command lines, in dispatch order
    pub fn console_commands(&self) -> Vec<String> {
        read(&self.console).clone()
    }

    pub fn broadcasts(&self) -> Vec<Message> {
        read(&self.broadcasts).clone()
    }

    /// Proxy transfers requested so far
    pub fn transfers(&self) -> Vec<(PlayerId, String)> {
        read(&self.transfers).clone()
    }
}

impl Server for InMemoryServer {
    fn player(&self, id: PlayerId) -> Option<Arc<dyn OnlinePlayer>> {
        self.get(id).map(|p| p as Arc<dyn OnlinePlayer>)
    }

    fn online_players(&self) -> Vec<Arc<dyn OnlinePlayer>> {
        read(&self.players)
            .values()
            .map(|p| Arc::clone(p) as Arc<dyn OnlinePlayer>)
            .collect()
    }

    fn players_in_world(&self, world: &str) -> Vec<Arc<dyn OnlinePlayer>> {
        read(&self.players)
            .values()
            .filter(|p| p.world() == world)
            .map(|p| Arc::clone(p) as Arc<dyn OnlinePlayer>)
            .collect()
    }

    fn dispatch_console_command(&self, command: &str) {
        write(&self.console).push(command.to_string());
    }

    fn broadcast(&self, message: &Message) {
        write(&self.broadcasts).push(message.clone());
        for player in read(&self.players).values() {
            player.send_message(message);
        }
    }

    fn connect(&self, player: PlayerId, server: &str) {
        write(&self.transfers).push((player, server.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_quit() {
        let server = InMemoryServer::new();
        let steve = server.join("Steve", "world");

        assert!(server.player(steve.id()).is_some());
        assert_eq!(server.online_players().len(), 1);

        server.quit(steve.id());
        assert!(server.player(steve.id()).is_none());
    }

    #[test]
    fn test_players_in_world() {
        let server = InMemoryServer::new();
        server.join("Steve", "world");
        let alex = server.join("Alex", "world_nether");

        let nether = server.players_in_world("world_nether");
        assert_eq!(nether.len(), 1);
        assert_eq!(nether[0].id(), alex.id());
    }

    #[test]
    fn test_broadcast_reaches_everyone() {
        let server = InMemoryServer::new();
        let steve = server.join("Steve", "world");
        let alex = server.join("Alex", "world");

        server.broadcast(&Message::Legacy("hi".into()));

        assert_eq!(server.broadcasts().len(), 1);
        assert_eq!(steve.state().messages.len(), 1);
        assert_eq!(alex.state().messages.len(), 1);
    }

    #[test]
    fn test_experience_never_negative() {
        let player = InMemoryPlayer::new("Steve", "world");

        player.apply_experience(ExperienceChange { amount: 5, unit: ExpUnit::Levels });
        player.apply_experience(ExperienceChange { amount: -8, unit: ExpUnit::Levels });
        player.apply_experience(ExperienceChange { amount: 30, unit: ExpUnit::Points });

        let state = player.state();
        assert_eq!(state.exp_levels, 0);
        assert_eq!(state.exp_points, 30);
    }

    #[test]
    fn test_dropped_item_removal() {
        let item = DroppedItem::new(ItemStack::new("STONE", 1));
        assert!(!item.is_removed());
        item.remove();
        assert!(item.is_removed());
    }
}
