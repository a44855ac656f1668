//! Deferred Actions
//!
//! Host-stepped timer queue. The page layer schedules actions at
//! millisecond due-times against whatever monotonic clock the host
//! advances; `advance` drains everything that has come due, in due
//! order. Nothing here sleeps.

use std::collections::VecDeque;

/// Timer handle for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

/// One scheduled entry
#[derive(Debug)]
struct Entry<A> {
    id: TimerId,
    due_at: u64,
    action: A,
}

/// Deterministic timer queue
#[derive(Debug)]
pub struct TimerQueue<A> {
    entries: VecDeque<Entry<A>>,
    now: u64,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Pending entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule an action `delay_ms` from the current clock reading
    pub fn schedule(&mut self, delay_ms: u64, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due_at = self.now + delay_ms;
        // Keep the queue sorted by due time; equal due times keep
        // scheduling order.
        let pos = self
            .entries
            .iter()
            .position(|e| e.due_at > due_at)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, Entry { id, due_at, action });
        id
    }

    /// Drop a scheduled entry; harmless if it already fired
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Advance the clock and drain every action that has come due
    pub fn advance(&mut self, now_ms: u64) -> Vec<A> {
        self.now = self.now.max(now_ms);
        let mut due = Vec::new();
        while let Some(front) = self.entries.front() {
            if front.due_at > self.now {
                break;
            }
            due.push(self.entries.pop_front().map(|e| e.action).unwrap());
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut timers: TimerQueue<&str> = TimerQueue::new();
        timers.schedule(300, "late");
        timers.schedule(100, "early");
        timers.schedule(200, "middle");

        assert!(timers.advance(50).is_empty());
        assert_eq!(timers.advance(250), vec!["early", "middle"]);
        assert_eq!(timers.advance(300), vec!["late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timers: TimerQueue<&str> = TimerQueue::new();
        let keep = timers.schedule(100, "keep");
        let cancelled = timers.schedule(100, "drop");
        timers.cancel(cancelled);

        assert_eq!(timers.advance(100), vec!["keep"]);
        // Cancelling a fired timer is harmless.
        timers.cancel(keep);
    }

    #[test]
    fn test_delays_stack_from_current_time() {
        let mut timers: TimerQueue<&str> = TimerQueue::new();
        timers.advance(1000);
        timers.schedule(500, "x");

        assert!(timers.advance(1499).is_empty());
        assert_eq!(timers.advance(1500), vec!["x"]);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut timers: TimerQueue<&str> = TimerQueue::new();
        timers.advance(1000);
        timers.advance(400);
        assert_eq!(timers.now(), 1000);
    }
}
