//! Result rendering
//!
//! Renders numbers the way a browser prints a JavaScript number, so a
//! result typed back into the keypad reads exactly as it was shown.

/// Magnitude at which rendering switches to exponent form
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which rendering switches to exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a result value for the display
///
/// - shortest decimal that round-trips (`0.1 + 0.2` shows all its digits)
/// - integers have no fractional part, `-0` shows as `0`
/// - exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`
/// - `Infinity`, `-Infinity` and `NaN` for non-finite values
#[must_use]
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
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    format!("{value}")
}
