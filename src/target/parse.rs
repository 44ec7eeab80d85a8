use crate::target::{TargetList, Timestamp};

const SEPARATOR: char = ',';

/// Permissive base-10 integer parse.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of decimal digits is taken and anything after it is ignored. A token
/// without any leading digit yields NaN instead of an error.
pub fn parse_int(token: &str) -> Timestamp {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return f64::NAN;
    }

    // a run of ASCII digits is always a valid float literal
    let value = digits[..len].parse::<f64>().unwrap_or(f64::NAN);
    if negative { -value } else { value }
}

/// Split a countdown attribute on commas and parse every token.
///
/// No token is dropped, so `""` gives a single NaN target.
pub fn parse_targets(attribute: &str) -> TargetList {
    attribute.split(SEPARATOR).map(parse_int).collect()
}
