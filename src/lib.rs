//! A live countdown over a list of target timestamps.
//!
//! A [`Ticker`] reads comma-separated epoch seconds from a
//! [`DisplaySurface`], then once per second writes the time left until the
//! head target as `Dd, HH:MM:SS` (or `HH:MM:SS` under a day). Expired targets
//! are dropped one per tick and the ticker stops once none are left.

pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod target;
pub mod ticker;
pub mod timer;
pub mod utils;

pub use error::{CountdownError, SurfaceError};
pub use format::Remaining;
pub use registry::TickerSet;
pub use target::{TargetList, Timestamp, parse_targets};
pub use ticker::{
    ChannelSurface, DisplaySurface, MemorySurface, TextUpdate, Tick, TickState, Ticker,
    TickerHandle,
};
pub use timer::{ManualWallClock, SystemWallClock, WallClock};
