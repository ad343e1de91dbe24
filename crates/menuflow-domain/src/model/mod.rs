//! Domain Model - Entities & Value Objects

pub mod action;
pub mod arguments;
pub mod experience;
pub mod item;
pub mod message;
pub mod session;
pub mod sound;
