pub mod list;
pub mod parse;

/// Epoch seconds of a countdown target. NaN marks an unparseable token.
pub type Timestamp = f64;

pub use list::TargetList;
pub use parse::{parse_int, parse_targets};
