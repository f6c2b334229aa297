//! Parsers for the textual formats accepted by the typed accessors.
//!
//! Each parser returns a plain message on failure; the accessor layer attaches
//! the variable name.

use std::time::Duration;

pub type ParseResult<T> = std::result::Result<T, String>;

/// Parse a boolean using the spellings `strconv`-style tools accept
pub fn parse_bool(raw: &str) -> ParseResult<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean '{raw}'")),
    }
}

/// Parse a duration such as `300ms`, `1.5h` or `2h45m`.
///
/// A bare `0` is accepted without a unit. Negative durations are rejected.
pub fn parse_duration(raw: &str) -> ParseResult<Duration> {
    let mut rest = raw;
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('-') {
        if stripped == "0" {
            return Ok(Duration::ZERO);
        }
        return Err(format!("negative duration '{raw}'"));
    }

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(format!("invalid duration '{raw}'"));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(format!("invalid duration '{raw}'"));
        }

        let unit_end = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, tail) = after_number.split_at(unit_end);
        let unit_nanos: u64 = match unit {
            "ns" => 1,
            "us" | "\u{b5}s" | "\u{3bc}s" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60 * 1_000_000_000,
            "h" => 3_600 * 1_000_000_000,
            "" => return Err(format!("missing unit in duration '{raw}'")),
            other => return Err(format!("unknown unit '{other}' in duration '{raw}'")),
        };

        let overflow = || format!("duration '{raw}' overflows");
        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole_value.checked_mul(unit_nanos).ok_or_else(overflow)?;
        nanos = nanos
            .checked_add(fraction_nanos(fraction, unit_nanos))
            .ok_or_else(overflow)?;
        total = total.checked_add(nanos).ok_or_else(overflow)?;

        rest = tail;
    }

    Ok(Duration::from_nanos(total))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

// Digits beyond nanosecond precision are truncated.
fn fraction_nanos(fraction: &str, unit_nanos: u64) -> u64 {
    let mut value: u128 = 0;
    let mut scale: u128 = 1;
    for digit in fraction.bytes().take(18) {
        value = value * 10 + u128::from(digit - b'0');
        scale *= 10;
    }
    (value * u128::from(unit_nanos) / scale) as u64
}

/// Parse a byte size such as `512`, `1.5 KiB` or `10MB` (binary multiples).
pub fn parse_bytes(raw: &str) -> ParseResult<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("byte size cannot be empty".to_string());
    }

    let number_end = trimmed
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .len();
    let (number, unit) = trimmed.split_at(number_end);
    let number = number.trim();
    let unit = unit.trim().to_ascii_uppercase();

    let n: f64 = number
        .parse()
        .map_err(|_| format!("invalid byte size '{raw}'"))?;
    if n.is_nan() || n < 0.0 {
        return Err("byte size cannot be negative".to_string());
    }

    let multiplier: f64 = match unit.as_str() {
        "" | "B" => 1.0,
        "K" | "KB" | "KIB" => 1024.0,
        "M" | "MB" | "MIB" => 1024.0 * 1024.0,
        "G" | "GB" | "GIB" => 1024.0 * 1024.0 * 1024.0,
        "T" | "TB" | "TIB" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        other => return Err(format!("unsupported byte unit '{other}'")),
    };

    let size = n * multiplier;
    if !size.is_finite() || size >= i64::MAX as f64 {
        return Err(format!("byte size '{raw}' overflows"));
    }
    Ok(size as u64)
}
