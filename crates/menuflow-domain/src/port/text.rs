//! Text substitution port

use crate::model::arguments::Arguments;
use crate::port::server::OnlinePlayer;

/// Ordering policy of the substitution pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionFlags {
    /// Resolve placeholders inside argument values before inserting them
    pub placeholders_in_arguments: bool,
    /// Resolve placeholders after argument substitution instead of before
    pub placeholders_after_arguments: bool,
}

/// Placeholder and argument substitution
pub trait TextResolver: Send + Sync {
    /// Produce the executable text of an action
    ///
    /// `target` is the player whose placeholders are rendered.
    fn resolve(
        &self,
        raw: &str,
        arguments: &Arguments,
        target: &dyn OnlinePlayer,
        flags: SubstitutionFlags,
    ) -> String;
}
