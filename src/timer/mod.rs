mod clock;
pub mod wall;

pub(crate) use clock::{Clock, DEFAULT_PERIOD};
pub use wall::{ManualWallClock, SystemWallClock, WallClock};
