use std::fmt;

const ONE_MINUTE: f64 = 60.0;
const ONE_HOUR: f64 = ONE_MINUTE * 60.0;
const ONE_DAY: f64 = ONE_HOUR * 24.0;

/// Remaining time split into display units.
///
/// Values stay `f64` so a NaN target flows through to the rendered text.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Remaining {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Remaining {
    /// Decompose a difference in seconds. Zero keeps every unit at zero.
    ///
    /// `%` is the truncated remainder, so a negative difference decomposes
    /// into negative units rather than being clamped.
    pub fn from_diff(diff: f64) -> Self {
        let mut remaining = Self::default();
        if diff == 0.0 {
            return remaining;
        }

        let mut diff = diff;
        remaining.days = (diff / ONE_DAY).floor();
        diff %= ONE_DAY;

        remaining.hours = (diff / ONE_HOUR).floor();
        diff %= ONE_HOUR;

        remaining.minutes = (diff / ONE_MINUTE).floor();
        diff %= ONE_MINUTE;

        remaining.seconds = diff.floor();
        remaining
    }

    fn has_days(&self) -> bool {
        self.days != 0.0 && !self.days.is_nan()
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_days() {
            write!(f, "{}d, ", number(self.days))?;
        }
        write!(
            f,
            "{}:{}:{}",
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds)
        )
    }
}

/// Zero-pad to two digits. Values of ten and above (and NaN) are unchanged.
pub fn pad2(value: f64) -> String {
    if value < 10.0 {
        format!("0{}", number(value))
    } else {
        number(value)
    }
}

/// Render a whole number, with `NaN` for the sentinel and no negative zero.
fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
