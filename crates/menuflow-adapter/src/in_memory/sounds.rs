//! Static sound registry

use std::collections::HashSet;

use menuflow_domain::{InvalidSoundName, Sound, SoundRegistry};

const DEFAULT_SOUNDS: &[&str] = &[
    "BLOCK_CHEST_OPEN",
    "BLOCK_CHEST_CLOSE",
    "BLOCK_NOTE_BLOCK_PLING",
    "BLOCK_NOTE_BLOCK_BASS",
    "ENTITY_EXPERIENCE_ORB_PICKUP",
    "ENTITY_GENERIC_EXPLODE",
    "ENTITY_PLAYER_LEVELUP",
    "ENTITY_VILLAGER_NO",
    "ENTITY_VILLAGER_YES",
    "UI_BUTTON_CLICK",
    // legacy names still found in old menu configs
    "CLICK",
    "EXPLODE",
    "LEVEL_UP",
    "NOTE_PLING",
];

/// Fixed lookup table of sound identifiers
///
/// Lookups are exact on the upper-cased identifier, with `.` accepted in
/// place of `_` so namespaced keys (`entity.generic.explode`) resolve too.
#[derive(Debug, Clone)]
pub struct StaticSoundRegistry {
    names: HashSet<String>,
}

impl StaticSoundRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticSoundRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SOUNDS.iter().copied())
    }
}

impl SoundRegistry for StaticSoundRegistry {
    fn resolve(&self, name: &str) -> Result<Sound, InvalidSoundName> {
        let key = name.strip_prefix("MINECRAFT:").unwrap_or(name).replace('.', "_");
        if self.names.contains(&key) {
            Ok(Sound::new(key))
        } else {
            Err(InvalidSoundName(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        let registry = StaticSoundRegistry::default();
        assert_eq!(registry.resolve("EXPLODE").unwrap().key(), "EXPLODE");
        assert_eq!(
            registry.resolve("MINECRAFT:ENTITY.GENERIC.EXPLODE").unwrap().key(),
            "ENTITY_GENERIC_EXPLODE"
        );
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = StaticSoundRegistry::new(["CLICK"]);
        assert_eq!(
            registry.resolve("BOOM"),
            Err(InvalidSoundName("BOOM".to_string()))
        );
    }
}
