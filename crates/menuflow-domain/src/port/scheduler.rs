//! Scheduler port

use shared::PlayerId;

/// Deferred unit of work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Tick-based scheduler
///
/// Nothing here blocks: each call queues the task and returns.
pub trait Scheduler: Send + Sync {
    /// Run on the next tick
    fn run(&self, task: Task);

    /// Run after `delay_ticks` ticks, not bound to any entity
    fn run_later(&self, task: Task, delay_ticks: u64);

    /// Run after `delay_ticks` ticks on the timeline of `player`
    fn run_later_for(&self, player: PlayerId, task: Task, delay_ticks: u64);
}
