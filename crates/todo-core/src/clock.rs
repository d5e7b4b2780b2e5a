//! Clock and Id Generation
//!
//! Ids keep the timestamp format of the stored data but are forced to be
//! strictly increasing, so two creations in one millisecond (or after the
//! clock moves backwards) still get distinct ids. Once `last + 1` would
//! overflow, the sequence restarts from the clock; the store skips ids that
//! are already taken.

use crate::item::TodoId;

/// Source of wall-clock time in epoch milliseconds
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Real time via `chrono`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hands out `max(now, last + 1)`, or `now` when `last + 1` overflows
#[derive(Debug)]
pub struct IdGenerator<C> {
    clock: C,
    last: Option<TodoId>,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Account for an id that already exists (e.g. hydrated from storage)
    pub fn observe(&mut self, id: TodoId) {
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
    }

    pub fn next_id(&mut self) -> TodoId {
        let now = self.clock.now_millis();
        let id = match self.last {
            Some(last) if now <= last => last.checked_add(1).unwrap_or(now),
            _ => now,
        };
        self.last = Some(id);
        id
    }
}

/// Settable clock for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualClock(std::rc::Rc<std::cell::Cell<i64>>);

#[cfg(test)]
impl ManualClock {
    pub(crate) fn at(millis: i64) -> Self {
        let clock = Self::default();
        clock.set(millis);
        clock
    }

    pub(crate) fn set(&self, millis: i64) {
        self.0.set(millis);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_when_ahead() {
        let clock = ManualClock::at(1_000);
        let mut ids = IdGenerator::new(clock.clone());
        assert_eq!(ids.next_id(), 1_000);
        clock.set(1_500);
        assert_eq!(ids.next_id(), 1_500);
    }

    #[test]
    fn test_same_tick_bumps() {
        let mut ids = IdGenerator::new(ManualClock::at(1_000));
        assert_eq!(ids.next_id(), 1_000);
        assert_eq!(ids.next_id(), 1_001);
        assert_eq!(ids.next_id(), 1_002);
    }

    #[test]
    fn test_clock_rollback_stays_increasing() {
        let clock = ManualClock::at(5_000);
        let mut ids = IdGenerator::new(clock.clone());
        ids.next_id();
        clock.set(10);
        assert_eq!(ids.next_id(), 5_001);
    }

    #[test]
    fn test_observe_seeds_from_existing() {
        let mut ids = IdGenerator::new(ManualClock::at(100));
        ids.observe(900);
        ids.observe(300);
        assert_eq!(ids.next_id(), 901);
    }

    #[test]
    fn test_exhausted_sequence_restarts_from_clock() {
        let mut ids = IdGenerator::new(ManualClock::at(1_000));
        ids.observe(i64::MAX);
        assert_eq!(ids.next_id(), 1_000);
        assert_eq!(ids.next_id(), 1_001);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
