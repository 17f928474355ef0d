//! Lenient parsing for raw text coming out of the editor's input fields.
//!
//! Nothing here rejects input: every value is normalized to something the
//! form model can hold.

use std::num::IntErrorKind;

/// Parse an integer the way a browser's `parseInt` reads a form field,
/// falling back to `1` when the result would be missing or zero.
///
/// Leading whitespace is skipped, an optional sign is honoured, a `0x`
/// prefix switches to hexadecimal, and the longest run of digits is used.
/// `"7"` gives `7`, `"12abc"` gives `12`, and `"abc"`, `""` and `"0"` give
/// `1`. Values past the range of `i64` saturate to `i64::MAX` or `i64::MIN`.
pub fn parse_int_or_one(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = format!("{}{}", sign, &body[..end]);

    match i64::from_str_radix(&digits, radix) {
        Ok(0) => 1,
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 1,
        },
    }
}

/// `"true"` is true, everything else is false.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}
