//! Lenient number parsing for the string and JSON input paths.
//!
//! Nothing here fails. Input that does not hold a number becomes NaN, which
//! `Vector2::repair` can replace later.

use log::debug;
use serde_json::Value;

/// Parses the longest numeric prefix of `s`, after skipping leading
/// whitespace. Accepts an optional sign, decimal digits with an optional
/// fraction, an optional exponent, and `Infinity`. Returns NaN if no prefix
/// is a number.
///
/// `"12abc"` gives 12, `" 3.5 "` gives 3.5, `"1e"` gives 1, `"abc"` gives NaN.
pub fn parse_float_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let len = numeric_prefix_len(t);
    if len == 0 {
        debug!("no number in {:?}, using NaN", s);
        return f64::NAN;
    }
    let prefix = &t[..len];
    if prefix.ends_with("Infinity") {
        return if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    match prefix.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("could not parse {:?}, using NaN", prefix);
            f64::NAN
        }
    }
}

/// Length in bytes of the numeric prefix of `s`, or 0 if there is none.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    if b[i..].starts_with(b"Infinity") {
        return i + "Infinity".len();
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut num_digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        num_digits += j - frac_start;
        // a lone "." is not part of the number unless digits surround it
        if num_digits > 0 {
            i = j;
        }
    }

    if num_digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Reads one vector component out of a JSON value. Numbers pass through;
/// anything else (bool, null, string, array, object) becomes NaN.
pub fn component_from_json(value: &Value) -> f64 {
    match value.as_f64() {
        Some(n) => n,
        None => {
            debug!("non-numeric component {}, using NaN", value);
            f64::NAN
        }
    }
}
