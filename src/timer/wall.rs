use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use crate::utils;

/// Source of "now" for countdown ticks, in epoch milliseconds.
pub trait WallClock: Send + Sync + 'static {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now_millis(&self) -> i64 {
        utils::timestamp_millis()
    }
}

/// A wall clock that only moves when told to. Clones share the same time.
#[derive(Debug, Default, Clone)]
pub struct ManualWallClock {
    millis: Arc<AtomicI64>,
}

impl ManualWallClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds * 1000)
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::Relaxed);
    }

    pub fn advance_seconds(&self, seconds: i64) {
        self.millis.fetch_add(seconds * 1000, Ordering::Relaxed);
    }
}

impl WallClock for ManualWallClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_shared_between_clones() {
        let clock = ManualWallClock::from_seconds(100);
        let other = clock.clone();

        clock.advance_seconds(5);
        assert_eq!(other.now_millis(), 105_000);

        other.set_millis(1_500);
        assert_eq!(clock.now_millis(), 1_500);
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemWallClock.now_millis() > 0);
    }
}
