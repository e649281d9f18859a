//! Boundary conversions between the integer transport representation
//! (USD cents, micro-unit quantities) and the floating-point display layer.

use crate::errors::CoreError;

/// Micro-units per whole holding unit.
pub const MICRO_UNITS_PER_UNIT: f64 = 1_000_000.0;

/// Cents per US dollar.
pub const CENTS_PER_USD: f64 = 100.0;

/// Convert an integer cent amount to USD.
pub fn cents_to_usd(cents: i64) -> f64 {
    cents as f64 / CENTS_PER_USD
}

/// Convert a USD amount to integer cents for transport, rounding to the
/// nearest cent. Rejects non-finite input.
pub fn usd_to_cents(usd: f64) -> Result<i64, CoreError> {
    if !usd.is_finite() {
        return Err(CoreError::ValidationError(format!(
            "Invalid dollar amount: {usd}"
        )));
    }
    Ok((usd * CENTS_PER_USD).round() as i64)
}

/// Convert a micro-unit quantity to whole units.
pub fn micro_units_to_units(micro: i64) -> f64 {
    micro as f64 / MICRO_UNITS_PER_UNIT
}

/// Format an integer cent amount as a USD currency string, e.g. `$1,234.56`.
/// Negative amounts render as `-$12.34`.
pub fn format_cents_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;

    // Group the dollar part with thousands separators
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{rem:02}")
}
