//! Action - One kind-tagged instruction bound to a menu item
//!
//! Menu configs carry action lines such as
//! `[message] &aBought {item}! <delay=20>`. The bracketed tag selects an
//! [`ActionKind`], the rest is raw text handed to the text pipeline when
//! the action runs.

use thiserror::Error;

/// Every action a menu item can trigger
///
/// This set is closed: the dispatcher matches on it exhaustively, so a new
/// kind does not build until it has a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Meta,
    Player,
    PlayerCommandEvent,
    Placeholder,
    Chat,
    Console,
    MiniMessage,
    MiniBroadcast,
    Message,
    Log,
    Broadcast,
    Close,
    OpenMenu,
    Connect,
    JsonMessage,
    JsonBroadcast,
    Refresh,
    TakeMoney,
    GiveMoney,
    TakeExp,
    GiveExp,
    GivePermission,
    TakePermission,
    BroadcastSound,
    BroadcastWorldSound,
    PlaySound,
}

impl ActionKind {
    /// All kinds, in declaration order
    pub const ALL: [ActionKind; 26] = [
        ActionKind::Meta,
        ActionKind::Player,
        ActionKind::PlayerCommandEvent,
        ActionKind::Placeholder,
        ActionKind::Chat,
        ActionKind::Console,
        ActionKind::MiniMessage,
        ActionKind::MiniBroadcast,
        ActionKind::Message,
        ActionKind::Log,
        ActionKind::Broadcast,
        ActionKind::Close,
        ActionKind::OpenMenu,
        ActionKind::Connect,
        ActionKind::JsonMessage,
        ActionKind::JsonBroadcast,
        ActionKind::Refresh,
        ActionKind::TakeMoney,
        ActionKind::GiveMoney,
        ActionKind::TakeExp,
        ActionKind::GiveExp,
        ActionKind::GivePermission,
        ActionKind::TakePermission,
        ActionKind::BroadcastSound,
        ActionKind::BroadcastWorldSound,
        ActionKind::PlaySound,
    ];

    /// Canonical tag, without brackets
    pub fn tag(&self) -> &'static str {
        match self {
            ActionKind::Meta => "meta",
            ActionKind::Player => "player",
            ActionKind::PlayerCommandEvent => "commandevent",
            ActionKind::Placeholder => "placeholder",
            ActionKind::Chat => "chat",
            ActionKind::Console => "console",
            ActionKind::MiniMessage => "minimessage",
            ActionKind::MiniBroadcast => "minibroadcast",
            ActionKind::Message => "message",
            ActionKind::Log => "log",
            ActionKind::Broadcast => "broadcast",
            ActionKind::Close => "close",
            ActionKind::OpenMenu => "openmenu",
            ActionKind::Connect => "connect",
            ActionKind::JsonMessage => "json",
            ActionKind::JsonBroadcast => "jsonbroadcast",
            ActionKind::Refresh => "refresh",
            ActionKind::TakeMoney => "takemoney",
            ActionKind::GiveMoney => "givemoney",
            ActionKind::TakeExp => "takeexp",
            ActionKind::GiveExp => "giveexp",
            ActionKind::GivePermission => "givepermission",
            ActionKind::TakePermission => "takepermission",
            ActionKind::BroadcastSound => "broadcastsound",
            ActionKind::BroadcastWorldSound => "broadcastsoundworld",
            ActionKind::PlaySound => "sound",
        }
    }

    /// Look a kind up by tag (brackets optional, case-insensitive)
    pub fn from_tag(tag: &str) -> Option<ActionKind> {
        let tag = tag.trim();
        let tag = tag
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(tag)
            .to_ascii_lowercase();

        match tag.as_str() {
            "openguimenu" => return Some(ActionKind::OpenMenu),
            "broadcastjson" => return Some(ActionKind::JsonBroadcast),
            _ => {}
        }

        ActionKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.tag())
    }
}

/// Errors raised while reading an action line from config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionLineError {
    #[error("Action line '{0}' does not start with a [tag]")]
    MissingTag(String),

    #[error("Unknown action tag [{0}]")]
    UnknownTag(String),

    #[error("Invalid delay '{0}', expected a whole number of ticks")]
    InvalidDelay(String),
}

/// A configured action, before any runtime substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickAction {
    pub kind: ActionKind,
    /// Raw text, still containing `{argument}` and `%placeholder%` tokens
    pub text: String,
    /// Ticks to wait before executing, `None` for the next tick
    pub delay: Option<u64>,
}

const DELAY_OPEN: &str = "<delay=";

impl ClickAction {
    pub fn new(kind: ActionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            delay: None,
        }
    }

    /// Builder: delay execution by `ticks`
    pub fn with_delay(mut self, ticks: u64) -> Self {
        self.delay = Some(ticks);
        self
    }

    /// Parse `[tag] text <delay=N>`
    ///
    /// The delay modifier may appear anywhere in the text and is removed
    /// from it. Only the last one counts.
    pub fn parse(line: &str) -> Result<Self, ActionLineError> {
        let line = line.trim();
        let close = match (line.starts_with('['), line.find(']')) {
            (true, Some(close)) => close,
            _ => return Err(ActionLineError::MissingTag(line.to_string())),
        };

        let tag = &line[1..close];
        let kind = ActionKind::from_tag(tag)
            .ok_or_else(|| ActionLineError::UnknownTag(tag.to_string()))?;

        let mut text = line[close + 1..].to_string();
        let mut delay = None;

        while let Some(start) = text.find(DELAY_OPEN) {
            let value_start = start + DELAY_OPEN.len();
            let Some(len) = text[value_start..].find('>') else {
                break;
            };
            let value = &text[value_start..value_start + len];
            delay = Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ActionLineError::InvalidDelay(value.to_string()))?,
            );
            text.replace_range(start..value_start + len + 1, "");
        }

        Ok(Self {
            kind,
            text: text.trim().to_string(),
            delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_lookup() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(ActionKind::from_tag("[OpenGuiMenu]"), Some(ActionKind::OpenMenu));
        assert_eq!(ActionKind::from_tag("broadcastjson"), Some(ActionKind::JsonBroadcast));
        assert_eq!(ActionKind::from_tag("[SOUND]"), Some(ActionKind::PlaySound));
        assert_eq!(ActionKind::from_tag("teleport"), None);
    }

    #[test]
    fn test_parse_plain_line() {
        let action = ClickAction::parse("[message] &aHello {name}").unwrap();
        assert_eq!(action.kind, ActionKind::Message);
        assert_eq!(action.text, "&aHello {name}");
        assert_eq!(action.delay, None);
    }

    #[test]
    fn test_parse_delay_modifier() {
        let action = ClickAction::parse("[console] give %player_name% diamond <delay=20>").unwrap();
        assert_eq!(action.kind, ActionKind::Console);
        assert_eq!(action.text, "give %player_name% diamond");
        assert_eq!(action.delay, Some(20));
    }

    #[test]
    fn test_parse_tag_only() {
        let action = ClickAction::parse("[close]").unwrap();
        assert_eq!(action.kind, ActionKind::Close);
        assert!(action.text.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ClickAction::parse("message hi"),
            Err(ActionLineError::MissingTag("message hi".to_string()))
        );
        assert_eq!(
            ClickAction::parse("[fly] up"),
            Err(ActionLineError::UnknownTag("fly".to_string()))
        );
        assert_eq!(
            ClickAction::parse("[close] <delay=soon>"),
            Err(ActionLineError::InvalidDelay("soon".to_string()))
        );
    }

    #[test]
    fn test_display_uses_brackets() {
        assert_eq!(ActionKind::BroadcastWorldSound.to_string(), "[broadcastsoundworld]");
    }
}
