//! Sound - Audio action arguments

use shared::ActionError;

/// A sound resolved by the sound registry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sound(String);

impl Sound {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Parsed `identifier [volume [pitch]]`
#[derive(Debug, Clone, PartialEq)]
pub struct SoundSpec {
    /// Identifier as written, not yet resolved
    pub name: String,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundSpec {
    pub const DEFAULT_VOLUME: f32 = 1.0;
    pub const DEFAULT_PITCH: f32 = 1.0;

    /// Split sound action text into identifier, volume and pitch
    ///
    /// The numeric fields fail independently: an invalid one keeps its
    /// default and contributes one warning to the returned list.
    pub fn parse(text: &str) -> (SoundSpec, Vec<ActionError>) {
        let mut warnings = Vec::new();
        let mut spec = SoundSpec {
            name: text.to_string(),
            volume: Self::DEFAULT_VOLUME,
            pitch: Self::DEFAULT_PITCH,
        };

        if !text.contains(' ') {
            return (spec, warnings);
        }

        let mut parts = text.splitn(3, ' ');
        spec.name = parts.next().unwrap_or_default().to_string();

        if let Some(volume) = parts.next() {
            match parse_float(volume) {
                Some(value) => spec.volume = value,
                None => warnings.push(invalid("Volume", volume)),
            }
        }
        if let Some(pitch) = parts.next() {
            match parse_float(pitch) {
                Some(value) => spec.pitch = value,
                None => warnings.push(invalid("Pitch", pitch)),
            }
        }

        (spec, warnings)
    }
}

fn parse_float(token: &str) -> Option<f32> {
    token.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn invalid(field: &'static str, value: &str) -> ActionError {
    ActionError::InvalidNumber {
        action: "sound",
        field,
        value: value.to_string(),
    }
}
