//! In-memory persistent meta store
//!
//! Instruction grammar:
//!
//! ```text
//! set      <key> <type> <value...>
//! add      <key> <type> <amount>
//! subtract <key> <type> <amount>
//! switch   <key>
//! remove   <key>
//! ```
//!
//! Types: `STRING`, `BOOLEAN`, `INTEGER`, `LONG`, `DOUBLE`. Keys are
//! `namespace:path` or a bare path, lowercase.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use menuflow_domain::{MetaHandler, MetaOutcome};
use regex::Regex;
use shared::PlayerId;

use super::{read, write};

static KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9._-]+:)?[a-z0-9._/-]+$").expect("valid meta key pattern")
});

/// A stored meta value
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    String(String),
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Double(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaType {
    String,
    Boolean,
    Integer,
    Long,
    Double,
}

impl MetaType {
    fn from_name(name: &str) -> Option<MetaType> {
        match name.to_ascii_uppercase().as_str() {
            "STRING" => Some(MetaType::String),
            "BOOLEAN" => Some(MetaType::Boolean),
            "INTEGER" => Some(MetaType::Integer),
            "LONG" => Some(MetaType::Long),
            "DOUBLE" => Some(MetaType::Double),
            _ => None,
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, MetaType::Integer | MetaType::Long | MetaType::Double)
    }

    fn parse(self, raw: &str) -> Option<MetaValue> {
        match self {
            MetaType::String => Some(MetaValue::String(raw.to_string())),
            MetaType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(MetaValue::Boolean(true)),
                "false" => Some(MetaValue::Boolean(false)),
                _ => None,
            },
            MetaType::Integer => raw.parse().ok().map(MetaValue::Integer),
            MetaType::Long => raw.parse().ok().map(MetaValue::Long),
            MetaType::Double => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(MetaValue::Double),
        }
    }
}

impl MetaValue {
    fn meta_type(&self) -> MetaType {
        match self {
            MetaValue::String(_) => MetaType::String,
            MetaValue::Boolean(_) => MetaType::Boolean,
            MetaValue::Integer(_) => MetaType::Integer,
            MetaValue::Long(_) => MetaType::Long,
            MetaValue::Double(_) => MetaType::Double,
        }
    }

    /// `self + other` for same-typed numbers, saturating
    fn plus(&self, other: &MetaValue) -> Option<MetaValue> {
        match (self, other) {
            (MetaValue::Integer(a), MetaValue::Integer(b)) => Some(MetaValue::Integer(a.saturating_add(*b))),
            (MetaValue::Long(a), MetaValue::Long(b)) => Some(MetaValue::Long(a.saturating_add(*b))),
            (MetaValue::Double(a), MetaValue::Double(b)) => Some(MetaValue::Double(a + b)),
            _ => None,
        }
    }

    fn negated(&self) -> Option<MetaValue> {
        match self {
            MetaValue::Integer(v) => Some(MetaValue::Integer(v.saturating_neg())),
            MetaValue::Long(v) => Some(MetaValue::Long(v.saturating_neg())),
            MetaValue::Double(v) => Some(MetaValue::Double(-v)),
            _ => None,
        }
    }
}

/// In-memory per-player meta store
#[derive(Debug, Default)]
pub struct InMemoryMetaStore {
    values: RwLock<HashMap<PlayerId, HashMap<String, MetaValue>>>,
}

impl InMemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: PlayerId, key: &str) -> Option<MetaValue> {
        read(&self.values)
            .get(&player)
            .and_then(|values| values.get(key))
            .cloned()
    }

    fn set(&self, player: PlayerId, key: &str, meta_type: MetaType, raw: &str) -> MetaOutcome {
        let Some(value) = meta_type.parse(raw) else {
            return MetaOutcome::NewValueIsDifferentType;
        };
        let mut values = write(&self.values);
        let entries = values.entry(player).or_default();
        if entries.get(key).is_some_and(|existing| existing.meta_type() != meta_type) {
            return MetaOutcome::ExistentValueIsDifferentType;
        }
        entries.insert(key.to_string(), value);
        MetaOutcome::Success
    }

    fn add(&self, player: PlayerId, key: &str, meta_type: MetaType, raw: &str, subtract: bool) -> MetaOutcome {
        if !meta_type.is_numeric() {
            return MetaOutcome::InvalidType;
        }
        let amount = match meta_type.parse(raw) {
            Some(amount) if subtract => amount.negated(),
            other => other,
        };
        let Some(amount) = amount else {
            return MetaOutcome::NewValueIsDifferentType;
        };

        let mut values = write(&self.values);
        let entries = values.entry(player).or_default();
        let next = match entries.get(key) {
            None => amount,
            Some(existing) => match existing.plus(&amount) {
                Some(sum) => sum,
                None => return MetaOutcome::ExistentValueIsDifferentType,
            },
        };
        entries.insert(key.to_string(), next);
        MetaOutcome::Success
    }

    fn switch(&self, player: PlayerId, key: &str) -> MetaOutcome {
        let mut values = write(&self.values);
        let entries = values.entry(player).or_default();
        let next = match entries.get(key) {
            None => true,
            Some(MetaValue::Boolean(current)) => !current,
            Some(_) => return MetaOutcome::ExistentValueIsDifferentType,
        };
        entries.insert(key.to_string(), MetaValue::Boolean(next));
        MetaOutcome::Success
    }

    fn remove(&self, player: PlayerId, key: &str) -> MetaOutcome {
        let removed = write(&self.values)
            .get_mut(&player)
            .and_then(|values| values.remove(key));
        match removed {
            Some(_) => MetaOutcome::Success,
            None => MetaOutcome::ValueNotFound,
        }
    }
}

impl MetaHandler for InMemoryMetaStore {
    fn execute(&self, player: PlayerId, instruction: &str) -> MetaOutcome {
        let mut parts = instruction.trim().splitn(4, ' ');
        let operation = parts.next().unwrap_or_default().to_ascii_lowercase();
        let Some(key) = parts.next().filter(|key| KEY.is_match(key)) else {
            return MetaOutcome::InvalidSyntax;
        };
        let meta_type = parts.next();
        let value = parts.next();

        match (operation.as_str(), meta_type, value) {
            ("remove", None, None) => self.remove(player, key),
            ("switch", None, None) => self.switch(player, key),
            ("set" | "add" | "subtract", Some(type_name), Some(value)) => {
                let Some(meta_type) = MetaType::from_name(type_name) else {
                    return MetaOutcome::InvalidType;
                };
                match operation.as_str() {
                    "set" => self.set(player, key, meta_type, value),
                    "add" => self.add(player, key, meta_type, value, false),
                    _ => self.add(player, key, meta_type, value, true),
                }
            }
            _ => MetaOutcome::InvalidSyntax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryMetaStore::new();
        let player = PlayerId::random();

        assert_eq!(store.execute(player, "set quests:stage STRING part two"), MetaOutcome::Success);
        assert_eq!(
            store.get(player, "quests:stage"),
            Some(MetaValue::String("part two".to_string()))
        );
    }

    #[test]
    fn test_set_rejects_type_change() {
        let store = InMemoryMetaStore::new();
        let player = PlayerId::random();

        store.execute(player, "set coins INTEGER 5");
        assert_eq!(
            store.execute(player, "set coins STRING five"),
            MetaOutcome::ExistentValueIsDifferentType
        );
        assert_eq!(
            store.execute(player, "set coins INTEGER five"),
            MetaOutcome::NewValueIsDifferentType
        );
    }

    #[test]
    fn test_add_and_subtract() {
        let store = InMemoryMetaStore::new();
        let player = PlayerId::random();

        assert_eq!(store.execute(player, "add coins LONG 10"), MetaOutcome::Success);
        assert_eq!(store.execute(player, "subtract coins LONG 3"), MetaOutcome::Success);
        assert_eq!(store.get(player, "coins"), Some(MetaValue::Long(7)));

        assert_eq!(store.execute(player, "add coins INTEGER 1"), MetaOutcome::ExistentValueIsDifferentType);
        assert_eq!(store.execute(player, "add name STRING x"), MetaOutcome::InvalidType);
    }

    #[test]
    fn test_switch() {
        let store = InMemoryMetaStore::new();
        let player = PlayerId::random();

        store.execute(player, "switch vip");
        assert_eq!(store.get(player, "vip"), Some(MetaValue::Boolean(true)));
        store.execute(player, "switch vip");
        assert_eq!(store.get(player, "vip"), Some(MetaValue::Boolean(false)));
    }

    #[test]
    fn test_remove_missing_value() {
        let store = InMemoryMetaStore::new();
        assert_eq!(store.execute(PlayerId::random(), "remove nothing"), MetaOutcome::ValueNotFound);
    }

    #[test]
    fn test_invalid_syntax() {
        let store = InMemoryMetaStore::new();
        let player = PlayerId::random();

        assert_eq!(store.execute(player, ""), MetaOutcome::InvalidSyntax);
        assert_eq!(store.execute(player, "set"), MetaOutcome::InvalidSyntax);
        assert_eq!(store.execute(player, "set Bad:Key STRING x"), MetaOutcome::InvalidSyntax);
        assert_eq!(store.execute(player, "fly key"), MetaOutcome::InvalidSyntax);
        assert_eq!(store.execute(player, "set key COLOR red"), MetaOutcome::InvalidType);
    }
}
