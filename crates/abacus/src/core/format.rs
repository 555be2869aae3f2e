//! Display formatting.
//!
//! Two tiers keep the display bounded in width:
//!
//! 1. Round to [`SIGNIFICANT_DIGITS`] and render the shortest decimal
//!    literal (`0.1 + 0.2` shows `0.3`, `4.0` shows `4`).
//! 2. If that literal is wider than [`MAX_DISPLAY_WIDTH`], render the
//!    original value in exponential notation with [`EXPONENT_DIGITS`]
//!    fractional digits (`1.23457e+15`).

use super::ArithmeticResult;

/// Text shown for an undefined result
pub const ERROR_DISPLAY: &str = "Error";

/// Widest plain decimal literal the display accepts
pub const MAX_DISPLAY_WIDTH: usize = 10;

/// Precision results are rounded to before rendering
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Fractional digits of the exponential fallback
pub const EXPONENT_DIGITS: usize = 5;

/// Formats an operation outcome, mapping failures to [`ERROR_DISPLAY`]
#[must_use]
pub fn format_outcome(outcome: ArithmeticResult) -> String {
    match outcome {
        Ok(value) => format_number(value),
        Err(_) => ERROR_DISPLAY.to_string(),
    }
}

/// Formats a value for the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    let canonical = canonical_decimal(round_significant(value));
    if canonical.len() > MAX_DISPLAY_WIDTH {
        exponential(value)
    } else {
        canonical
    }
}

/// Parses a display literal back into a number.
///
/// Returns `None` for the error display and for anything non-finite.
#[must_use]
pub fn parse_display(display: &str) -> Option<f64> {
    display
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Whether `display` is text the keypad itself can put on the display.
///
/// That is [`ERROR_DISPLAY`], a typed literal (`12`, `0.`, `-0.50`) or the
/// exponential form [`format_number`] falls back to (`1.23457e+10`).
/// Signs like `+5`, `-0` and foreign exponents like `1E5` are rejected.
#[must_use]
pub fn is_display_literal(display: &str) -> bool {
    display == ERROR_DISPLAY
        || (parse_display(display).is_some()
            && (is_entry_literal(display) || is_exponential_literal(display)))
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn is_entry_literal(text: &str) -> bool {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    if integer.is_empty() || !all_digits(integer) || fraction.is_some_and(|f| !all_digits(f)) {
        return false;
    }
    if integer.len() > 1 && integer.starts_with('0') {
        return false;
    }
    // a bare zero only carries a sign once a point follows it
    !(negative && integer == "0" && fraction.is_none())
}

fn is_exponential_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let Some((mantissa, exponent)) = unsigned.split_once('e') else {
        return false;
    };
    let Some((lead, fraction)) = mantissa.split_once('.') else {
        return false;
    };
    let Some(power) = exponent
        .strip_prefix('+')
        .or_else(|| exponent.strip_prefix('-'))
    else {
        return false;
    };

    lead.len() == 1
        && lead != "0"
        && all_digits(lead)
        && fraction.len() == EXPONENT_DIGITS
        && all_digits(fraction)
        && !power.is_empty()
        && all_digits(power)
}

fn round_significant(value: f64) -> f64 {
    // LowerExp with N-1 fractional digits keeps exactly N significant digits
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

fn canonical_decimal(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    value.to_string()
}

fn exponential(value: f64) -> String {
    let rendered = format!("{:.*e}", EXPONENT_DIGITS, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}
