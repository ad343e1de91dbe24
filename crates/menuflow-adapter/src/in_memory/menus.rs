//! In-memory menu registry and sessions

use std::collections::HashMap;
use std::sync::RwLock;

use menuflow_domain::{Arguments, Menus, ScreenDefinition, Session};
use shared::PlayerId;

use super::{read, write};

/// Something the menu system was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Opened { player: PlayerId, screen: String },
    Closed { player: PlayerId },
    Refreshed { player: PlayerId },
    Placeholders { player: PlayerId, text: String },
}

/// In-memory menu system
#[derive(Debug, Default)]
pub struct InMemoryMenus {
    screens: RwLock<HashMap<String, ScreenDefinition>>,
    sessions: RwLock<HashMap<PlayerId, Session>>,
    events: RwLock<Vec<MenuEvent>>,
}

impl InMemoryMenus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen, replacing any with the same name
    pub fn register(&self, screen: ScreenDefinition) {
        write(&self.screens).insert(screen.name().to_string(), screen);
    }

    /// Put a player straight into a session
    pub fn insert_session(&self, session: Session) {
        write(&self.sessions).insert(session.viewer, session);
    }

    pub fn events(&self) -> Vec<MenuEvent> {
        read(&self.events).clone()
    }

    fn record(&self, event: MenuEvent) {
        write(&self.events).push(event);
    }
}

impl Menus for InMemoryMenus {
    fn session(&self, player: PlayerId) -> Option<Session> {
        read(&self.sessions).get(&player).cloned()
    }

    fn screen(&self, name: &str) -> Option<ScreenDefinition> {
        read(&self.screens).get(name).cloned()
    }

    fn open(
        &self,
        player: PlayerId,
        screen: &ScreenDefinition,
        arguments: Option<Arguments>,
        placeholder_identity: Option<PlayerId>,
    ) {
        let session = Session {
            viewer: player,
            screen: screen.name().to_string(),
            arguments: arguments.unwrap_or_default(),
            placeholder_identity,
        };
        write(&self.sessions).insert(player, session);
        self.record(MenuEvent::Opened {
            player,
            screen: screen.name().to_string(),
        });
    }

    fn close(&self, player: PlayerId) {
        write(&self.sessions).remove(&player);
        self.record(MenuEvent::Closed { player });
    }

    fn refresh(&self, player: PlayerId) {
        if read(&self.sessions).contains_key(&player) {
            self.record(MenuEvent::Refreshed { player });
        }
    }

    fn set_placeholders(&self, player: PlayerId, text: &str) {
        self.record(MenuEvent::Placeholders {
            player,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces_session() {
        let menus = InMemoryMenus::new();
        let player = PlayerId::random();
        let shop = ScreenDefinition::new("shop").with_parameters(["item"]);
        menus.register(shop.clone());

        menus.insert_session(Session::new(player, "main"));
        menus.open(player, &shop, Some([("item", "apple")].into_iter().collect()), None);

        let session = menus.session(player).unwrap();
        assert_eq!(session.screen, "shop");
        assert_eq!(session.arguments.get("item"), Some("apple"));
    }

    #[test]
    fn test_close_ends_session() {
        let menus = InMemoryMenus::new();
        let player = PlayerId::random();
        menus.insert_session(Session::new(player, "main"));

        menus.close(player);

        assert!(menus.session(player).is_none());
        assert_eq!(menus.events(), vec![MenuEvent::Closed { player }]);
    }

    #[test]
    fn test_refresh_without_session_is_not_recorded() {
        let menus = InMemoryMenus::new();
        menus.refresh(PlayerId::random());
        assert!(menus.events().is_empty());
    }
}
