//! # menuflow Domain Layer
//!
//! The menu-click action engine and the menu-item dupe guard.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - ActionKind, Session, ScreenDefinition, items    ││
//! │  │  port/    - Trait definitions (not implementations)         ││
//! │  │  service/ - ActionDispatcher, navigation binder, DupeGuard  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! ```text
//! click ─► ClickActionTask ─(scheduler)─► TextResolver ─► ActionDispatcher ─► one effect
//! close / login / pickup / drop ─► DupeGuard ─► marked items removed
//! ```
//!
//! Nothing in here talks to a real server. Everything outside is a port,
//! and every port can be swapped for an in-memory adapter in tests.

pub mod model;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use model::{
    action::{ActionKind, ActionLineError, ClickAction},
    arguments::Arguments,
    experience::{ExpUnit, ExperienceChange},
    item::{DataKeyMarker, Inventory, ItemMarker, ItemStack},
    message::Message,
    session::{ScreenDefinition, Session},
    sound::{Sound, SoundSpec},
};

pub use port::{
    menus::Menus,
    providers::{Economy, MetaHandler, MetaOutcome, Permissions},
    scheduler::{Scheduler, Task},
    server::{OnlinePlayer, Server, WorldItem},
    sounds::{InvalidSoundName, SoundRegistry},
    text::{SubstitutionFlags, TextResolver},
};

pub use service::{
    click_task::{schedule_actions, ClickActionTask},
    dispatcher::{ActionDispatcher, ActionOutcome, ActionPorts},
    dupe_guard::{CleanupDelays, DupeGuard},
    navigation::NavigationPlan,
};
