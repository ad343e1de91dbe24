//! Domain Services

pub mod click_task;
pub mod dispatcher;
pub mod dupe_guard;
pub mod navigation;
