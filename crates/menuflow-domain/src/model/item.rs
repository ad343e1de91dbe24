//! Items, inventories and the menu-item marker
//!
//! Menus render synthesized items. Those are marked at creation so the
//! dupe guard can recognise them once they escape the menu. The mark lives
//! in the item's own data container; there is no separate index.

use std::collections::BTreeMap;

/// A stack of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub material: String,
    pub amount: u32,
    /// Persistent key/value data attached to the stack
    pub data: BTreeMap<String, String>,
}

impl ItemStack {
    pub fn new(material: impl Into<String>, amount: u32) -> Self {
        Self {
            material: material.into(),
            amount,
            data: BTreeMap::new(),
        }
    }

    /// Builder: attach a data entry
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// A player inventory: storage slots plus the off-hand slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub contents: Vec<Option<ItemStack>>,
    pub off_hand: Option<ItemStack>,
}

impl Inventory {
    /// Standard player storage size
    pub const SIZE: usize = 36;

    pub fn new() -> Self {
        Self::with_size(Self::SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            contents: vec![None; size],
            off_hand: None,
        }
    }

    /// Put `item` in the first empty slot; returns the slot index
    pub fn add(&mut self, item: ItemStack) -> Option<usize> {
        let slot = self.contents.iter().position(Option::is_none)?;
        self.contents[slot] = Some(item);
        Some(slot)
    }

    /// Empty every storage slot holding a stack that matches
    ///
    /// Returns the number of slots cleared. The off-hand slot is not
    /// touched.
    pub fn remove_matching(&mut self, mut predicate: impl FnMut(&ItemStack) -> bool) -> usize {
        let mut removed = 0;
        for slot in self.contents.iter_mut() {
            if slot.as_ref().is_some_and(&mut predicate) {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }

    /// Occupied storage slots
    pub fn items(&self) -> impl Iterator<Item = &ItemStack> {
        self.contents.iter().flatten()
    }
}

/// Recognises (and applies) the menu-item mark
pub trait ItemMarker: Send + Sync {
    /// Whether `item` was synthesized by a menu
    fn is_marked(&self, item: &ItemStack) -> bool;

    /// Tag `item` as menu-owned
    fn mark(&self, item: &mut ItemStack);
}

/// Marker backed by a key in the item data container
#[derive(Debug, Clone)]
pub struct DataKeyMarker {
    key: String,
}

impl DataKeyMarker {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ItemMarker for DataKeyMarker {
    fn is_marked(&self, item: &ItemStack) -> bool {
        item.data.get(&self.key).is_some_and(|v| v == "true")
    }

    fn mark(&self, item: &mut ItemStack) {
        item.data.insert(self.key.clone(), "true".to_string());
    }
}
