use std::time::Duration;

use tokio::task::JoinHandle;

use crate::{
    error::CountdownError,
    target::parse_targets,
    ticker::{DisplaySurface, Tick, TickState},
    timer::{Clock, DEFAULT_PERIOD, SystemWallClock, WallClock},
};

/// A countdown bound to one display surface, ready to be started.
pub struct Ticker<S, W = SystemWallClock> {
    surface: S,
    wall_clock: W,
    period: Duration,
}

impl<S: DisplaySurface> Ticker<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            wall_clock: SystemWallClock,
            period: DEFAULT_PERIOD,
        }
    }
}

impl<S: DisplaySurface, W: WallClock> Ticker<S, W> {
    pub fn with_wall_clock<C: WallClock>(self, wall_clock: C) -> Ticker<S, C> {
        Ticker {
            surface: self.surface,
            wall_clock,
            period: self.period,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Result<Self, CountdownError> {
        if period.is_zero() {
            return Err(CountdownError::InvalidPeriod(format!(
                "period of surface '{}' must be greater than 0",
                self.surface.id()
            )));
        }
        self.period = period;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        self.surface.id()
    }

    /// Parse the surface's targets and spawn the ticking task.
    ///
    /// Returns `None` without touching the surface when there are no targets.
    /// Must be called from within a tokio runtime.
    pub fn start(self) -> Option<TickerHandle> {
        self.prepare().map(TickerTask::spawn)
    }

    /// Read the surface's targets without spawning anything yet.
    pub(crate) fn prepare(self) -> Option<TickerTask<S, W>> {
        let attribute = self.surface.countdown_attribute();
        let state = TickState::new(parse_targets(&attribute))?;
        Some(TickerTask {
            id: self.surface.id().to_string(),
            state,
            surface: self.surface,
            wall_clock: self.wall_clock,
            period: self.period,
            clock: None,
        })
    }
}

pub(crate) struct TickerTask<S, W> {
    id: String,
    state: TickState,
    surface: S,
    wall_clock: W,
    period: Duration,
    clock: Option<Clock>,
}

impl<S: DisplaySurface, W: WallClock> TickerTask<S, W> {
    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn spawn(mut self) -> TickerHandle {
        tracing::info!(
            surface = %self.id,
            targets = self.state.targets().len(),
            period = ?self.period,
            "Starting countdown"
        );
        self.clock = Some(Clock::new(self.period));
        let id = self.id.clone();
        let join = tokio::spawn(self.run());
        TickerHandle { id, join }
    }

    async fn run(mut self) {
        while let Some(clock) = self.clock.as_mut() {
            clock.tick().await;
            self.on_tick().await;
        }
    }

    async fn on_tick(&mut self) {
        let now = self.wall_clock.now_millis();
        match self.state.tick(now) {
            Tick::Display(text) => {
                tracing::debug!(surface = %self.id, %text, "Tick");
                if let Err(e) = self.surface.set_text(&text).await {
                    tracing::warn!(surface = %self.id, error = %e, "Failed to update display");
                }
            }
            Tick::Exhausted => self.stop(),
        }
    }

    fn stop(&mut self) {
        if self.clock.take().is_some() {
            tracing::info!(surface = %self.id, "Countdown finished");
        }
    }
}

/// Handle to a running countdown.
#[derive(Debug)]
pub struct TickerHandle {
    id: String,
    join: JoinHandle<()>,
}

impl TickerHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True once every target has expired and the ticker stopped.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait until the ticker stops.
    pub async fn finished(self) -> Result<(), CountdownError> {
        let id = self.id;
        self.join
            .await
            .map_err(|source| CountdownError::Join { id, source })
    }
}
