//! Menu system port

use crate::model::arguments::Arguments;
use crate::model::session::{ScreenDefinition, Session};
use shared::PlayerId;

/// The menu system owning screens and sessions
pub trait Menus: Send + Sync {
    /// The player's open session, if any
    fn session(&self, player: PlayerId) -> Option<Session>;

    /// Find a screen by exact name
    fn screen(&self, name: &str) -> Option<ScreenDefinition>;

    /// Open `screen` for `player`
    ///
    /// `arguments: None` opens the screen fresh, without bindings.
    fn open(
        &self,
        player: PlayerId,
        screen: &ScreenDefinition,
        arguments: Option<Arguments>,
        placeholder_identity: Option<PlayerId>,
    );

    /// Close the player's menu, running its close handlers
    fn close(&self, player: PlayerId);

    /// Recompute and redisplay the player's open menu
    fn refresh(&self, player: PlayerId);

    /// Hand placeholder text to the player's open menu
    fn set_placeholders(&self, player: PlayerId, text: &str);
}
