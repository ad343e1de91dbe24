//! Server and player ports

use crate::model::experience::ExperienceChange;
use crate::model::item::{Inventory, ItemStack};
use crate::model::message::Message;
use crate::model::sound::Sound;
use shared::PlayerId;
use std::sync::Arc;

/// The running server
pub trait Server: Send + Sync {
    /// Live handle for an online player, `None` once they left
    fn player(&self, id: PlayerId) -> Option<Arc<dyn OnlinePlayer>>;

    fn online_players(&self) -> Vec<Arc<dyn OnlinePlayer>>;

    /// Players currently in the named world
    fn players_in_world(&self, world: &str) -> Vec<Arc<dyn OnlinePlayer>>;

    /// Run a command line with console privileges
    fn dispatch_console_command(&self, command: &str);

    /// Deliver a message to every online player
    fn broadcast(&self, message: &Message);

    /// Transfer a player to another server behind the proxy
    fn connect(&self, player: PlayerId, server: &str);
}

/// A connected player
///
/// Handles are only valid for the current tick. Deferred work keeps the
/// [`PlayerId`] and asks the [`Server`] again.
pub trait OnlinePlayer: Send + Sync {
    fn id(&self) -> PlayerId;

    fn name(&self) -> String;

    /// Name of the world the player is in
    fn world(&self) -> String;

    /// Send chat as this player; a leading `/` runs a command as them
    fn chat(&self, text: &str);

    fn send_message(&self, message: &Message);

    /// Play `sound` at the player's own location
    fn play_sound(&self, sound: &Sound, volume: f32, pitch: f32);

    fn apply_experience(&self, change: ExperienceChange);

    /// Snapshot of the inventory
    fn inventory(&self) -> Inventory;

    /// Replace the inventory
    fn set_inventory(&self, inventory: Inventory);

    /// Re-send the inventory view to the client
    fn update_inventory(&self);
}

/// An item lying in the world as an entity
pub trait WorldItem {
    fn stack(&self) -> &ItemStack;

    /// Despawn the entity
    fn remove(&self);
}
