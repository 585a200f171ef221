//! Total conversion of loosely-typed JSON values into integers.
//!
//! Request bodies come from clients that send ids as numbers, numeric strings,
//! floats or booleans. Every JSON shape maps to exactly one `i64`:
//!
//! | input            | result                                        |
//! |------------------|-----------------------------------------------|
//! | absent, `null`   | 0                                             |
//! | `true`/`false`   | 1 / 0                                         |
//! | integer          | itself, saturating at `i64::MAX`              |
//! | float            | truncated toward zero, saturating             |
//! | string           | leading numeric prefix, otherwise 0           |
//! | array, object    | 0                                             |

use serde_json::{Number, Value};

/// Coerce an optional JSON value to an integer
pub fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(b)) => i64::from(*b),
        Some(Value::Number(n)) => number_to_int(n),
        Some(Value::String(s)) => string_to_int(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => 0,
    }
}

fn number_to_int(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if n.as_u64().is_some() {
        return i64::MAX;
    }
    // `as` truncates toward zero and saturates
    n.as_f64().map(|f| f as i64).unwrap_or(0)
}

fn string_to_int(s: &str) -> i64 {
    let s = s.trim_start_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut fractional = false;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            fractional = true;
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            fractional = true;
            end = exp_end + exp_digits;
        }
    }

    let prefix = &s[..end];
    if fractional {
        return prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0);
    }

    match prefix.parse::<i64>() {
        Ok(i) => i,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
