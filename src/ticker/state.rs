use crate::{format::Remaining, target::TargetList};

/// What a single tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Text to write to the surface.
    Display(String),
    /// The last target expired. Nothing is written and ticking stops.
    Exhausted,
}

/// Countdown state shared across ticks: the remaining targets.
#[derive(Debug, Clone)]
pub struct TickState {
    targets: TargetList,
}

impl TickState {
    /// `None` when there is nothing to count down to.
    pub fn new(targets: TargetList) -> Option<Self> {
        (!targets.is_empty()).then_some(Self { targets })
    }

    pub fn targets(&self) -> &TargetList {
        &self.targets
    }

    /// Run one tick with "now" sampled by the caller.
    ///
    /// An expired head is dropped and the next one used with the same `now`.
    /// Only one target is dropped per tick, so if the new head has expired as
    /// well the negative difference is rendered as it is.
    pub fn tick(&mut self, now_millis: i64) -> Tick {
        let now = now_millis.div_euclid(1000) as f64;
        let Some(head) = self.targets.head() else {
            return Tick::Exhausted;
        };

        let mut diff = head - now;
        if diff < 0.0 {
            match self.targets.advance() {
                Some(next) => {
                    tracing::info!(expired = head, next, "Countdown target reached");
                    diff = next - now;
                }
                None => {
                    tracing::info!(expired = head, "Last countdown target reached");
                    return Tick::Exhausted;
                }
            }
        }

        Tick::Display(Remaining::from_diff(diff).to_string())
    }
}
