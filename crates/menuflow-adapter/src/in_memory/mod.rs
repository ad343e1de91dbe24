//! In-Memory Adapter Implementations
//!
//! Simple in-memory implementations of the port traits.
//! Useful for testing, development and the demo binary.

pub mod menus;
pub mod meta;
pub mod providers;
pub mod scheduler;
pub mod server;
pub mod sounds;
pub mod text;

pub use menus::{InMemoryMenus, MenuEvent};
pub use meta::{InMemoryMetaStore, MetaValue};
pub use providers::{InMemoryEconomy, InMemoryPermissions};
pub use scheduler::TickScheduler;
pub use server::{DroppedItem, InMemoryPlayer, InMemoryServer, PlayedSound, PlayerState};
pub use sounds::StaticSoundRegistry;
pub use text::ArgumentTextResolver;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panicked writer leaves plain data behind; keep serving it.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
