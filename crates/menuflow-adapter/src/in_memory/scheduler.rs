//! Tick scheduler
//!
//! Time only moves when [`TickScheduler::tick`] is called, so tests decide
//! exactly when deferred work runs. Every task waits at least one tick.

use std::sync::{Mutex, MutexGuard, PoisonError};

use menuflow_domain::{Scheduler, Task};
use shared::PlayerId;
use tracing::debug;

struct Scheduled {
    due: u64,
    seq: u64,
    owner: Option<PlayerId>,
    task: Task,
}

#[derive(Default)]
struct Queue {
    current_tick: u64,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

/// Manually driven scheduler
#[derive(Default)]
pub struct TickScheduler {
    queue: Mutex<Queue>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Queue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, owner: Option<PlayerId>, task: Task, delay_ticks: u64) {
        let mut queue = self.lock();
        let due = queue.current_tick.saturating_add(delay_ticks.max(1));
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push(Scheduled { due, seq, owner, task });
    }

    /// Advance one tick and run everything now due
    ///
    /// Returns how many tasks ran. Tasks scheduled while running land on a
    /// later tick.
    pub fn tick(&self) -> usize {
        let due = {
            let mut queue = self.lock();
            queue.current_tick += 1;
            let now = queue.current_tick;
            let (mut ready, waiting): (Vec<_>, Vec<_>) =
                queue.pending.drain(..).partition(|s| s.due <= now);
            queue.pending = waiting;
            ready.sort_by_key(|s| (s.due, s.seq));
            ready
        };

        let count = due.len();
        if count > 0 {
            debug!(tick = self.current_tick(), tasks = count, "Running scheduled tasks");
        }
        for scheduled in due {
            (scheduled.task)();
        }
        count
    }

    /// Run `ticks` ticks; returns the total number of tasks run
    pub fn advance(&self, ticks: u64) -> usize {
        (0..ticks).map(|_| self.tick()).sum()
    }

    pub fn current_tick(&self) -> u64 {
        self.lock().current_tick
    }

    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Drop the pending tasks bound to `player`
    ///
    /// Entity timelines end with the entity.
    pub fn retire_for(&self, player: PlayerId) -> usize {
        let mut queue = self.lock();
        let before = queue.pending.len();
        queue.pending.retain(|s| s.owner != Some(player));
        let retired = before - queue.pending.len();
        if retired > 0 {
            debug!(%player, retired, "Retired player tasks");
        }
        retired
    }
}

impl Scheduler for TickScheduler {
    fn run(&self, task: Task) {
        self.push(None, task, 1);
    }

    fn run_later(&self, task: Task, delay_ticks: u64) {
        self.push(None, task, delay_ticks);
    }

    fn run_later_for(&self, player: PlayerId, task: Task, delay_ticks: u64) {
        self.push(Some(player), task, delay_ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Task) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        let make = move || -> Task {
            let handle = Arc::clone(&handle);
            Box::new(move || {
                handle.fetch_add(1, Ordering::SeqCst);
            })
        };
        (count, make)
    }

    #[test]
    fn test_run_waits_one_tick() {
        let scheduler = TickScheduler::new();
        let (count, task) = counter();

        scheduler.run(task());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert_eq!(scheduler.tick(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_later_delay() {
        let scheduler = TickScheduler::new();
        let (count, task) = counter();

        scheduler.run_later(task(), 10);

        assert_eq!(scheduler.advance(9), 0);
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.current_tick(), 10);
    }

    #[test]
    fn test_huge_delay_stays_pending() {
        let scheduler = TickScheduler::new();
        let (count, task) = counter();

        scheduler.run_later(task(), u64::MAX);

        assert_eq!(scheduler.advance(3), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_zero_delay_is_next_tick() {
        let scheduler = TickScheduler::new();
        let (_, task) = counter();

        scheduler.run_later(task(), 0);

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.tick(), 1);
    }

    #[test]
    fn test_same_tick_runs_in_scheduling_order() {
        let scheduler = TickScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            scheduler.run(Box::new(move || order.lock().unwrap().push(label)));
        }
        scheduler.tick();

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_retire_for_drops_only_owned_tasks() {
        let scheduler = TickScheduler::new();
        let (count, task) = counter();
        let steve = PlayerId::random();
        let alex = PlayerId::random();

        scheduler.run_later_for(steve, task(), 1);
        scheduler.run_later_for(alex, task(), 1);
        scheduler.run_later(task(), 1);

        assert_eq!(scheduler.retire_for(steve), 1);
        scheduler.tick();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
