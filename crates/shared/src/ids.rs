//! Stable identities
//!
//! Live player handles are never held across a scheduler boundary.
//! Deferred work stores a `PlayerId` and looks the player up again when
//! it runs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connected user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identity
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(PlayerId::random(), PlayerId::random());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let uuid = Uuid::nil();
        let json = serde_json::to_string(&PlayerId::new(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
