#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::models::Step;

/// Virtual-time queue of fire-once steps.
///
/// Time only moves when the owner calls [`Scheduler::pop_due`] and
/// [`Scheduler::settle`], which keeps every animation deterministic under
/// test. Steps sharing a due time fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), Step>,
}

impl Scheduler {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, step: Step) {
        self.seq += 1;
        self.queue.insert((self.now + delay, self.seq), step);
    }

    /// Removes the earliest step due at or before `until` and moves the clock
    /// to its due time, so anything it schedules is relative to that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<Step> {
        let (&(due, seq), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }

        self.now = self.now.max(due);
        self.queue.remove(&(due, seq))
    }

    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
