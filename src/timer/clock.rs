use std::time::Duration;
use tokio::time::Instant;
use tokio::time::{Interval, MissedTickBehavior, interval_at};

pub(crate) const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Recurring tick source. The first tick fires one period after creation.
pub(crate) struct Clock {
    inner: Interval,
}

impl Clock {
    pub(crate) fn new(period: Duration) -> Self {
        let mut inner = interval_at(Instant::now() + period, period);
        inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { inner }
    }

    pub(crate) async fn tick(&mut self) {
        self.inner.tick().await;
    }
}
