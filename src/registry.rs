use dashmap::{DashMap, mapref::entry::Entry};

use crate::{
    error::CountdownError,
    ticker::{DisplaySurface, Ticker, TickerHandle},
    timer::WallClock,
};

/// Running countdowns keyed by surface id, at most one live ticker per id.
#[derive(Default)]
pub struct TickerSet {
    handles: DashMap<String, TickerHandle>,
}

impl TickerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `ticker` and track it.
    ///
    /// Returns `Ok(false)` when the surface had no targets. A finished ticker
    /// for the same id is replaced; a running one is an error. The surface is
    /// read before the set is locked, so it may itself use this set.
    pub fn start<S, W>(&self, ticker: Ticker<S, W>) -> Result<bool, CountdownError>
    where
        S: DisplaySurface,
        W: WallClock,
    {
        let Some(task) = ticker.prepare() else {
            return Ok(false);
        };

        match self.handles.entry(task.id().to_string()) {
            Entry::Occupied(mut entry) => {
                if !entry.get().is_finished() {
                    return Err(CountdownError::DuplicateSurface(entry.key().clone()));
                }
                entry.insert(task.spawn());
            }
            Entry::Vacant(entry) => {
                entry.insert(task.spawn());
            }
        }
        Ok(true)
    }

    /// Number of tickers that have not finished yet.
    pub fn running(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every tracked ticker to finish, draining the set.
    pub async fn wait_all(&self) -> Result<(), CountdownError> {
        let ids: Vec<String> = self.handles.iter().map(|e| e.key().clone()).collect();
        for id in ids {
            if let Some((_, handle)) = self.handles.remove(&id) {
                handle.finished().await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{ticker::MemorySurface, timer::ManualWallClock};

    const NOW: i64 = 1_700_000_000;

    fn ticker(
        id: &str,
        attribute: String,
        clock: &ManualWallClock,
    ) -> Ticker<Arc<MemorySurface>, ManualWallClock> {
        Ticker::new(Arc::new(MemorySurface::new(id, attribute))).with_wall_clock(clock.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_running_surface_is_rejected() {
        let clock = ManualWallClock::from_seconds(NOW);
        let set = TickerSet::new();

        assert!(set.start(ticker("a", (NOW + 10).to_string(), &clock)).unwrap());
        let result = set.start(ticker("a", (NOW + 20).to_string(), &clock));
        assert!(matches!(result, Err(CountdownError::DuplicateSurface(id)) if id == "a"));

        assert!(set.start(ticker("b", (NOW + 20).to_string(), &clock)).unwrap());
        assert_eq!(set.running(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_surface_can_restart() {
        let clock = ManualWallClock::from_seconds(NOW);
        let set = TickerSet::new();

        assert!(set.start(ticker("a", (NOW - 1).to_string(), &clock)).unwrap());
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(set.running(), 0);

        assert!(set.start(ticker("a", (NOW + 10).to_string(), &clock)).unwrap());
        assert_eq!(set.running(), 1);
    }

    struct SetAwareSurface {
        set: Arc<TickerSet>,
    }

    #[async_trait::async_trait]
    impl DisplaySurface for SetAwareSurface {
        fn id(&self) -> &str {
            "aware"
        }

        fn countdown_attribute(&self) -> String {
            // looks at the set it is being started into
            let _ = self.set.running();
            (NOW + 10).to_string()
        }

        async fn set_text(&self, _text: &str) -> Result<(), crate::error::SurfaceError> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_surface_may_use_its_own_set() {
        let set = Arc::new(TickerSet::new());
        let surface = SetAwareSurface { set: set.clone() };

        assert!(set.start(Ticker::new(surface)).unwrap());
        assert_eq!(set.running(), 1);

        let again = SetAwareSurface { set: set.clone() };
        let result = set.start(Ticker::new(again));
        assert!(matches!(result, Err(CountdownError::DuplicateSurface(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_all_drains() {
        let clock = ManualWallClock::from_seconds(NOW);
        let set = TickerSet::new();
        set.start(ticker("a", (NOW + 1).to_string(), &clock)).unwrap();
        set.start(ticker("b", format!("{},{}", NOW, NOW + 2), &clock)).unwrap();

        let waiter = async {
            set.wait_all().await.unwrap();
        };
        let mover = async {
            for _ in 0..4 {
                tokio::time::sleep(Duration::from_secs(1)).await;
                clock.advance_seconds(1);
            }
        };
        tokio::join!(waiter, mover);

        assert!(set.is_empty());
    }
}
