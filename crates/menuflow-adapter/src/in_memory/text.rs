//! Argument and placeholder substitution
//!
//! `{name}` is replaced by the bound argument `name`; `%key%` by a
//! placeholder rendered for the target player. Unknown tokens are left
//! as written.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use menuflow_domain::{Arguments, OnlinePlayer, SubstitutionFlags, TextResolver};
use regex::{Captures, Regex};

use super::{read, write};

static ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}\s]+)\}").expect("valid argument pattern"));

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("valid placeholder pattern"));

/// Text resolver with built-in player placeholders
///
/// Built-ins: `%player_name%`, `%player_uuid%`, `%player_world%`. More can
/// be registered as fixed values.
#[derive(Debug, Default)]
pub struct ArgumentTextResolver {
    placeholders: RwLock<HashMap<String, String>>,
}

impl ArgumentTextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixed placeholder value
    pub fn set_placeholder(&self, key: impl Into<String>, value: impl Into<String>) {
        write(&self.placeholders).insert(key.into(), value.into());
    }

    fn placeholders(&self, text: &str, target: &dyn OnlinePlayer) -> String {
        let fixed = read(&self.placeholders);
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                let key = &caps[1];
                match key.to_ascii_lowercase().as_str() {
                    "player_name" => target.name(),
                    "player_uuid" => target.id().to_string(),
                    "player_world" => target.world(),
                    _ => fixed
                        .get(key)
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string()),
                }
            })
            .into_owned()
    }

    fn arguments(text: &str, arguments: &Arguments) -> String {
        ARGUMENT
            .replace_all(text, |caps: &Captures| {
                arguments
                    .get(&caps[1])
                    .map(str::to_string)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl TextResolver for ArgumentTextResolver {
    fn resolve(
        &self,
        raw: &str,
        arguments: &Arguments,
        target: &dyn OnlinePlayer,
        flags: SubstitutionFlags,
    ) -> String {
        let arguments: Arguments = if flags.placeholders_in_arguments {
            arguments
                .iter()
                .map(|(name, value)| (name, self.placeholders(value, target)))
                .collect()
        } else {
            arguments.clone()
        };

        if flags.placeholders_after_arguments {
            self.placeholders(&Self::arguments(raw, &arguments), target)
        } else {
            Self::arguments(&self.placeholders(raw, target), &arguments)
        }
    }
}
