/// Parse a stored points value the way the web client always has: optional
/// surrounding whitespace, an optional sign, then leading digits.
///
/// Returns `None` when no digits lead the value. Negative values clamp to 0
/// and values beyond `u64` saturate.
#[must_use]
pub fn parse_points(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }

    Some(rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX))
}
