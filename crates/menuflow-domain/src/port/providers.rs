//! Optional provider ports
//!
//! Economy, permissions and persistent meta are capabilities the server
//! may lack. The dispatcher receives each one as `Option<Arc<dyn _>>` and
//! also honours [`Economy::is_available`] / [`Permissions::is_available`]
//! for providers that are installed but not hooked.

use shared::PlayerId;

/// Economy provider
pub trait Economy: Send + Sync {
    fn is_available(&self) -> bool;

    fn give(&self, player: PlayerId, amount: f64);

    fn take(&self, player: PlayerId, amount: f64);
}

/// Permission provider
pub trait Permissions: Send + Sync {
    fn is_available(&self) -> bool;

    fn grant(&self, player: PlayerId, node: &str);

    fn revoke(&self, player: PlayerId, node: &str);
}

/// Result of a persistent-meta operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaOutcome {
    Success,
    ValueNotFound,
    InvalidSyntax,
    InvalidType,
    NewValueIsDifferentType,
    ExistentValueIsDifferentType,
}

/// Per-player persistent key/value store
pub trait MetaHandler: Send + Sync {
    /// Parse and run one meta instruction for `player`
    fn execute(&self, player: PlayerId, instruction: &str) -> MetaOutcome;
}
