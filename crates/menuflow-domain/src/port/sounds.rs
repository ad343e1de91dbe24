//! Sound lookup port

use crate::model::sound::Sound;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sound '{0}'")]
pub struct InvalidSoundName(pub String);

/// Sound lookup table
pub trait SoundRegistry: Send + Sync {
    /// Resolve an upper-cased identifier
    fn resolve(&self, name: &str) -> Result<Sound, InvalidSoundName>;
}
