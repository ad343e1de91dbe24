//! Action Dispatcher - Runs one resolved action against a player
//!
//! The dispatcher is the engine's interpreter. Each [`ActionKind`] has a
//! handler with its own argument grammar; every handler either performs
//! its side effect or fails with an [`ActionError`]. Failures never reach
//! the caller: they are written to [`Diagnostics`] and the action becomes
//! a no-op.

use std::sync::Arc;

use crate::model::action::ActionKind;
use crate::model::experience::ExperienceChange;
use crate::model::message::Message;
use crate::model::session::Session;
use crate::model::sound::SoundSpec;
use crate::port::menus::Menus;
use crate::port::providers::{Economy, MetaHandler, MetaOutcome, Permissions};
use crate::port::scheduler::Scheduler;
use crate::port::server::{OnlinePlayer, Server};
use crate::port::sounds::SoundRegistry;
use crate::port::text::TextResolver;
use crate::service::navigation;
use shared::{ActionError, Diagnostics, Severity};

/// Collaborators the dispatcher acts through
///
/// Optional providers are `None` when the server does not have them.
#[derive(Clone)]
pub struct ActionPorts {
    pub server: Arc<dyn Server>,
    pub menus: Arc<dyn Menus>,
    pub sounds: Arc<dyn SoundRegistry>,
    pub text: Arc<dyn TextResolver>,
    pub scheduler: Arc<dyn Scheduler>,
    pub economy: Option<Arc<dyn Economy>>,
    pub permissions: Option<Arc<dyn Permissions>>,
    pub meta: Option<Arc<dyn MetaHandler>>,
}

/// How one action ended
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The side effect happened
    Performed,
    /// Nothing to do, by design (e.g. a non-positive exp amount)
    Ignored,
    /// Nothing happened; the error was recorded
    Failed(ActionError),
}

/// Who hears a sound action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoundTarget {
    Player,
    Everyone,
    SameWorld,
}

/// Executes resolved actions
pub struct ActionDispatcher {
    ports: ActionPorts,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ActionDispatcher {
    pub fn new(ports: ActionPorts, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { ports, diagnostics }
    }

    pub fn ports(&self) -> &ActionPorts {
        &self.ports
    }

    /// Execute `kind` with already-resolved `text`
    ///
    /// `session` is the player's open menu, passed in rather than looked
    /// up so the caller decides which session the action sees.
    pub fn execute(
        &self,
        player: &dyn OnlinePlayer,
        kind: ActionKind,
        text: &str,
        session: Option<&Session>,
    ) -> ActionOutcome {
        match self.handle(player, kind, text, session) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report(&err);
                ActionOutcome::Failed(err)
            }
        }
    }

    fn report(&self, err: &ActionError) {
        self.diagnostics
            .debug(err.debug_level(), err.severity(), &err.to_string());
    }

    fn handle(
        &self,
        player: &dyn OnlinePlayer,
        kind: ActionKind,
        text: &str,
        session: Option<&Session>,
    ) -> Result<ActionOutcome, ActionError> {
        match kind {
            ActionKind::Meta => self.meta(player, text),
            ActionKind::Player | ActionKind::PlayerCommandEvent => {
                let command = non_empty(text, "Player command")?;
                player.chat(&format!("/{}", command));
                Ok(ActionOutcome::Performed)
            }
            ActionKind::Console => {
                let command = non_empty(text, "Console command")?;
                self.ports.server.dispatch_console_command(command);
                Ok(ActionOutcome::Performed)
            }
            ActionKind::Placeholder => match session {
                Some(_) => {
                    self.ports.menus.set_placeholders(player.id(), text);
                    Ok(ActionOutcome::Performed)
                }
                None => Ok(ActionOutcome::Ignored),
            },
            ActionKind::Chat => {
                player.chat(text);
                Ok(ActionOutcome::Performed)
            }
            ActionKind::Message => self.tell(player, Message::legacy(text)),
            ActionKind::MiniMessage => self.tell(player, Message::MiniMessage(text.to_string())),
            ActionKind::JsonMessage => self.tell(player, Message::Json(text.to_string())),
            ActionKind::Broadcast => self.broadcast(Message::legacy(text)),
            ActionKind::MiniBroadcast => self.broadcast(Message::MiniMessage(text.to_string())),
            ActionKind::JsonBroadcast => self.broadcast(Message::Json(text.to_string())),
            ActionKind::Log => self.log(text, session),
            ActionKind::Close => {
                self.ports.menus.close(player.id());
                Ok(ActionOutcome::Performed)
            }
            ActionKind::OpenMenu => self.open_menu(player, text, session),
            ActionKind::Connect => {
                let server = non_empty(text, "Connect")?;
                self.ports.server.connect(player.id(), server);
                Ok(ActionOutcome::Performed)
            }
            ActionKind::Refresh => match session {
                Some(_) => {
                    self.ports.menus.refresh(player.id());
                    Ok(ActionOutcome::Performed)
                }
                None => Err(ActionError::NoActiveSession(player.name())),
            },
            ActionKind::GiveMoney => self.money(player, text, true),
            ActionKind::TakeMoney => self.money(player, text, false),
            ActionKind::GiveExp => Ok(self.experience(player, text, false)),
            ActionKind::TakeExp => Ok(self.experience(player, text, true)),
            ActionKind::GivePermission => self.permission(player, text, true),
            ActionKind::TakePermission => self.permission(player, text, false),
            ActionKind::PlaySound => self.sound(player, SoundTarget::Player, text),
            ActionKind::BroadcastSound => self.sound(player, SoundTarget::Everyone, text),
            ActionKind::BroadcastWorldSound => self.sound(player, SoundTarget::SameWorld, text),
        }
    }

    fn tell(&self, player: &dyn OnlinePlayer, message: Message) -> Result<ActionOutcome, ActionError> {
        player.send_message(&message);
        Ok(ActionOutcome::Performed)
    }

    fn broadcast(&self, message: Message) -> Result<ActionOutcome, ActionError> {
        self.ports.server.broadcast(&message);
        Ok(ActionOutcome::Performed)
    }

    /// `[SEVERITY] message`, written as `[menu]: message`
    fn log(&self, text: &str, session: Option<&Session>) -> Result<ActionOutcome, ActionError> {
        let mut parts = text.splitn(2, ' ');
        let first = parts.next().unwrap_or_default();
        if first.trim().is_empty() {
            return Err(ActionError::MissingText("Log"));
        }

        let (severity, message) = match parts.next() {
            None => (Severity::Info, first),
            Some(rest) => match Severity::from_name(first) {
                Some(severity) => (severity, rest),
                None => {
                    self.report(&ActionError::InvalidLogLevel(first.to_string()));
                    (Severity::Info, rest)
                }
            },
        };

        let menu = session.map(|s| s.screen.as_str()).unwrap_or("Unknown Menu");
        self.diagnostics
            .log(severity, &format!("[{}]: {}", menu, message));
        Ok(ActionOutcome::Performed)
    }

    fn open_menu(
        &self,
        player: &dyn OnlinePlayer,
        text: &str,
        session: Option<&Session>,
    ) -> Result<ActionOutcome, ActionError> {
        let menus = &self.ports.menus;
        let plan = navigation::bind(text, session, |name| menus.screen(name))?;

        for warning in &plan.warnings {
            self.report(warning);
        }

        menus.open(
            player.id(),
            &plan.screen,
            plan.arguments,
            plan.placeholder_identity,
        );
        Ok(ActionOutcome::Performed)
    }

    fn money(&self, player: &dyn OnlinePlayer, text: &str, give: bool) -> Result<ActionOutcome, ActionError> {
        let operation = if give { "give money" } else { "take money" };

        let economy = self
            .ports
            .economy
            .as_ref()
            .filter(|economy| economy.is_available())
            .ok_or_else(|| ActionError::ProviderUnavailable {
                provider: "Economy",
                operation: operation.to_string(),
            })?;

        let amount = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| ActionError::InvalidNumber {
                action: operation,
                field: "Amount",
                value: text.to_string(),
            })?;

        if give {
            economy.give(player.id(), amount);
        } else {
            economy.take(player.id(), amount);
        }
        Ok(ActionOutcome::Performed)
    }

    fn permission(&self, player: &dyn OnlinePlayer, node: &str, grant: bool) -> Result<ActionOutcome, ActionError> {
        let permissions = self
            .ports
            .permissions
            .as_ref()
            .filter(|permissions| permissions.is_available())
            .ok_or_else(|| ActionError::ProviderUnavailable {
                provider: "Permissions",
                operation: format!(
                    "{} permission: {}",
                    if grant { "give" } else { "take" },
                    node
                ),
            })?;

        if grant {
            permissions.grant(player.id(), node);
        } else {
            permissions.revoke(player.id(), node);
        }
        Ok(ActionOutcome::Performed)
    }

    /// Non-numeric and non-positive amounts are ignored without a diagnostic
    fn experience(&self, player: &dyn OnlinePlayer, text: &str, take: bool) -> ActionOutcome {
        let Some(change) = ExperienceChange::parse_positive(text) else {
            return ActionOutcome::Ignored;
        };

        player.apply_experience(if take { change.negated() } else { change });
        ActionOutcome::Performed
    }

    fn sound(&self, player: &dyn OnlinePlayer, target: SoundTarget, text: &str) -> Result<ActionOutcome, ActionError> {
        let (spec, warnings) = SoundSpec::parse(text);

        let sound = self
            .ports
            .sounds
            .resolve(&spec.name.to_ascii_uppercase())
            .map_err(|_| ActionError::InvalidSound(spec.name.clone()))?;

        for warning in &warnings {
            self.report(warning);
        }

        match target {
            SoundTarget::Player => player.play_sound(&sound, spec.volume, spec.pitch),
            SoundTarget::Everyone => {
                for listener in self.ports.server.online_players() {
                    listener.play_sound(&sound, spec.volume, spec.pitch);
                }
            }
            SoundTarget::SameWorld => {
                for listener in self.ports.server.players_in_world(&player.world()) {
                    listener.play_sound(&sound, spec.volume, spec.pitch);
                }
            }
        }
        Ok(ActionOutcome::Performed)
    }

    fn meta(&self, player: &dyn OnlinePlayer, text: &str) -> Result<ActionOutcome, ActionError> {
        let handler = self
            .ports
            .meta
            .as_ref()
            .ok_or(ActionError::Unsupported("Meta"))?;

        match handler.execute(player.id(), text) {
            MetaOutcome::Success => Ok(ActionOutcome::Performed),
            MetaOutcome::ValueNotFound => Ok(ActionOutcome::Ignored),
            MetaOutcome::InvalidSyntax => Err(ActionError::MetaRejected(
                "Make sure you have the right syntax.",
            )),
            MetaOutcome::InvalidType => Err(ActionError::MetaRejected(
                "The specified type is not supported for the specified action!",
            )),
            MetaOutcome::NewValueIsDifferentType => Err(ActionError::MetaRejected(
                "New value is a different type than the old value!",
            )),
            MetaOutcome::ExistentValueIsDifferentType => Err(ActionError::MetaRejected(
                "Existent value is a different type than the new value!",
            )),
        }
    }
}

/// `text` unchanged, unless it is blank
fn non_empty<'a>(text: &'a str, action: &'static str) -> Result<&'a str, ActionError> {
    if text.trim().is_empty() {
        Err(ActionError::MissingText(action))
    } else {
        Ok(text)
    }
}
