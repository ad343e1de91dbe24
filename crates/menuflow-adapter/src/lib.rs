//! # menuflow Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `in_memory/` - Server, players, menus, providers, text and scheduler
//!   kept entirely in memory
//! - `backend` - Wires every in-memory adapter into a dispatcher and guard

pub mod backend;
pub mod in_memory;

pub use backend::InMemoryBackend;
