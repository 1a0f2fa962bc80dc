//! Pure helper functions for extracting typed options from a `serde_json::Value` record.
//!
//! Layer options are open-ended JSON objects. Each helper takes the record,
//! a key name, and a default. If the key is missing or the value is not the
//! expected shape, the default is returned. These never fail — every
//! algorithm option has a documented fallback.

use serde_json::Value;

use crate::color::Color;

/// Extracts an `f64` from `options[name]`, returning `default` if missing or wrong type.
pub fn param_f64(options: &Value, name: &str, default: f64) -> f64 {
    options.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts an `i64` from `options[name]`, returning `default` if missing or wrong type.
pub fn param_i64(options: &Value, name: &str, default: i64) -> i64 {
    options.get(name).and_then(Value::as_i64).unwrap_or(default)
}

/// Extracts a `usize` from `options[name]`, returning `default` if missing,
/// negative, or wrong type.
pub fn param_usize(options: &Value, name: &str, default: usize) -> usize {
    options
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `String` from `options[name]`, returning `default` if missing or wrong type.
pub fn param_string(options: &Value, name: &str, default: &str) -> String {
    options
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts a two-element numeric array from `options[name]`.
///
/// Returns `default` if the key is missing, the value is not an array of at
/// least two numbers, or any element is non-numeric.
pub fn param_pair(options: &Value, name: &str, default: [f64; 2]) -> [f64; 2] {
    let Some(arr) = options.get(name).and_then(Value::as_array) else {
        return default;
    };
    match (
        arr.first().and_then(Value::as_f64),
        arr.get(1).and_then(Value::as_f64),
    ) {
        (Some(a), Some(b)) => [a, b],
        _ => default,
    }
}

/// Extracts a color from `options[name]`.
///
/// Accepts either a bare number (splatted across all channels) or an array
/// of at least three numbers. Anything else yields `default`.
pub fn param_color(options: &Value, name: &str, default: Color) -> Color {
    match options.get(name) {
        Some(v) => {
            if let Some(n) = v.as_f64() {
                return Color::splat(n);
            }
            if let Some(arr) = v.as_array() {
                if let (Some(r), Some(g), Some(b)) = (
                    arr.first().and_then(Value::as_f64),
                    arr.get(1).and_then(Value::as_f64),
                    arr.get(2).and_then(Value::as_f64),
                ) {
                    return Color::new(r, g, b);
                }
            }
            default
        }
        None => default,
    }
}
