pub mod state;
pub mod surface;
pub mod ticker;

pub use state::{Tick, TickState};
pub use surface::{ChannelSurface, DisplaySurface, MemorySurface, TextUpdate};
pub use ticker::{Ticker, TickerHandle};
