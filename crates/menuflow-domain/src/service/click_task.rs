//! ClickActionTask - An action carried across the scheduler boundary
//!
//! Actions never run inside the click handler. They are queued on the
//! scheduler and, when they fire, look the player up again: someone who
//! disconnected in between is skipped without a diagnostic.

use std::sync::Arc;

use crate::model::action::{ActionKind, ClickAction};
use crate::model::arguments::Arguments;
use crate::port::scheduler::Task;
use crate::port::text::SubstitutionFlags;
use crate::service::dispatcher::{ActionDispatcher, ActionOutcome};
use shared::PlayerId;

/// One pending action
#[derive(Debug, Clone, PartialEq)]
pub struct ClickActionTask {
    pub player: PlayerId,
    pub kind: ActionKind,
    /// Raw text, substituted when the task runs
    pub text: String,
    /// Argument snapshot taken at click time
    pub arguments: Arguments,
    pub flags: SubstitutionFlags,
}

impl ClickActionTask {
    pub fn new(player: PlayerId, kind: ActionKind, text: impl Into<String>) -> Self {
        Self {
            player,
            kind,
            text: text.into(),
            arguments: Arguments::new(),
            flags: SubstitutionFlags::default(),
        }
    }

    /// Task for a configured action
    pub fn from_action(player: PlayerId, action: &ClickAction) -> Self {
        Self::new(player, action.kind, action.text.clone())
    }

    /// Builder: set the argument snapshot
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Builder: set substitution flags
    pub fn with_flags(mut self, flags: SubstitutionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Execute now
    ///
    /// Returns `None` when the player is no longer online.
    pub fn run(self, dispatcher: &ActionDispatcher) -> Option<ActionOutcome> {
        let ports = dispatcher.ports();
        let player = ports.server.player(self.player)?;
        let session = ports.menus.session(self.player);

        let target = session
            .as_ref()
            .and_then(|s| s.placeholder_identity)
            .and_then(|id| ports.server.player(id))
            .unwrap_or_else(|| Arc::clone(&player));

        let text = ports
            .text
            .resolve(&self.text, &self.arguments, target.as_ref(), self.flags);

        Some(dispatcher.execute(player.as_ref(), self.kind, &text, session.as_ref()))
    }

    /// Queue on the dispatcher's scheduler
    ///
    /// `None` or `Some(0)` runs on the next tick.
    pub fn schedule(self, dispatcher: &Arc<ActionDispatcher>, delay: Option<u64>) {
        let scheduler = Arc::clone(&dispatcher.ports().scheduler);
        let dispatcher = Arc::clone(dispatcher);
        let task: Task = Box::new(move || {
            self.run(&dispatcher);
        });

        match delay {
            Some(ticks) if ticks > 0 => scheduler.run_later(task, ticks),
            _ => scheduler.run(task),
        }
    }
}

/// Queue every action of a click, each with its own delay
pub fn schedule_actions(
    dispatcher: &Arc<ActionDispatcher>,
    player: PlayerId,
    actions: &[ClickAction],
    arguments: &Arguments,
    flags: SubstitutionFlags,
) {
    for action in actions {
        ClickActionTask::from_action(player, action)
            .with_arguments(arguments.clone())
            .with_flags(flags)
            .schedule(dispatcher, action.delay);
    }
}
