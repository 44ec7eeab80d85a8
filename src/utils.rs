use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, negative for times before it.
pub fn timestamp_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(before) => -(before.duration().as_millis() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_millis_after_epoch() {
        // 2020-01-01
        assert!(timestamp_millis() > 1_577_836_800_000);
    }
}
