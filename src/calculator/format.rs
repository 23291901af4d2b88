//! Result formatting for the calculator display.
//!
//! Results are rounded to a fixed number of significant digits before
//! rendering so that binary floating-point noise (`0.1 + 0.2`) never
//! reaches the display.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest leading number: optional sign, mantissa, and an exponent only
    /// when it has digits.
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Text shown in place of a NaN or infinite result.
pub const ERROR_TOKEN: &str = "Error";

/// Number of significant decimal digits kept in a displayed result.
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Magnitude at and above which results switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which non-zero results switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Format a result for the display.
///
/// Non-finite values become [`ERROR_TOKEN`]. Finite values are rounded to
/// [`SIGNIFICANT_DIGITS`] and rendered without trailing zeros.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TOKEN.to_string();
    }

    let rounded = round_significant(value);
    if rounded == 0.0 {
        // Also folds negative zero.
        return "0".to_string();
    }

    let magnitude = rounded.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        format!("{}", rounded)
    } else {
        format_exponent(rounded)
    }
}

/// Parse display text back into a number.
///
/// The longest numeric prefix is used, so a half-deleted exponent such as
/// `1.5e` reads as `1.5`. Text with no numeric prefix, including
/// [`ERROR_TOKEN`], yields NaN so that it propagates through further
/// arithmetic.
pub fn parse_display(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Whether the display text is the error token.
pub fn is_error(text: &str) -> bool {
    text == ERROR_TOKEN
}

fn round_significant(value: f64) -> f64 {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    scientific.parse().unwrap_or(value)
}

/// Shortest mantissa with an explicitly signed exponent, e.g. `1.5e-7`,
/// `1e+21`.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
