//! Port Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the engine needs from the running server,
//! but NOT how it's provided. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait Server          │  InMemoryServer
//!   fn player()         │  (a live game server)
//! trait Scheduler       │  TickScheduler
//!   fn run_later()      │
//! ```

pub mod menus;
pub mod providers;
pub mod scheduler;
pub mod server;
pub mod sounds;
pub mod text;
