//! Conversions between operand text and `f64`.
//!
//! Operands are kept as text so that partial input like `"12."` or `"-"`
//! survives. Parsing takes the longest numeric prefix and rendering uses the
//! shortest round-trip form, switching to exponent notation outside
//! `[1e-6, 1e21)`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix: optional sign, then `Infinity` or a decimal
    /// mantissa with an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Parse operand text into a number.
///
/// Trailing garbage is ignored (`"1e+"` is 1). Text without a numeric
/// prefix, such as `"Error"`, `"-"` or `"."`, parses as NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    NUMERIC_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Render a number as operand text.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    // `{:e}` yields "1e21" / "1.5e-7"; positive exponents need a '+'.
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
