use std::cell::Cell;

use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};

use crate::task::TaskId;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Issues time-based ids that never repeat and never go backwards, even when
/// the clock stalls or steps back between calls.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last_issued: Option<i64>,
}

impl IdAllocator {
    pub fn starting_after(last: Option<TaskId>) -> Self {
        Self {
            last_issued: last.map(|id| id.0),
        }
    }

    /// Fails only when the last issued id is already `i64::MAX` and the
    /// clock cannot supply a larger one.
    pub fn next(&mut self, now: DateTime<Utc>) -> anyhow::Result<TaskId> {
        let candidate = now.timestamp_millis();
        let id = match self.last_issued {
            Some(last) if candidate <= last => last
                .checked_add(1)
                .ok_or_else(|| anyhow!("task id space exhausted after {last}"))?,
            _ => candidate,
        };
        self.last_issued = Some(id);
        Ok(TaskId(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn ids_increase_when_clock_stalls() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let mut ids = IdAllocator::default();

        let a = ids.next(clock.now()).unwrap();
        let b = ids.next(clock.now()).unwrap();
        clock.advance(Duration::milliseconds(500));
        let c = ids.next(clock.now()).unwrap();

        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.0, a.0 + 500);
    }

    #[test]
    fn ids_continue_past_restored_maximum() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let restored_max = TaskId(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap().timestamp_millis());
        let mut ids = IdAllocator::starting_after(Some(restored_max));

        assert_eq!(ids.next(clock.now()).unwrap(), TaskId(restored_max.0 + 1));
    }

    #[test]
    fn exhausted_id_space_is_an_error_not_a_wrap() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let mut ids = IdAllocator::starting_after(Some(TaskId(i64::MAX)));

        let err = ids.next(clock.now()).expect_err("no id above i64::MAX");
        assert!(err.to_string().contains("exhausted"));
        // still exhausted on the next attempt; nothing wrapped around
        assert!(ids.next(clock.now()).is_err());
    }
}
