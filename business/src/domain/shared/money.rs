/// Number of minor currency units (pence) in one major unit (pound).
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Converts a major-unit amount into minor units, rounding half away from zero.
///
/// Returns `None` for non-finite or negative amounts, and for amounts that do
/// not fit in an `i64` once scaled.
pub fn to_minor_units(amount: f64) -> Option<i64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    let scaled = (amount * MINOR_UNITS_PER_MAJOR).round();
    if scaled > i64::MAX as f64 {
        return None;
    }

    Some(scaled as i64)
}

/// Converts minor units back into a major-unit amount.
pub fn from_minor_units(amount: i64) -> f64 {
    amount as f64 / MINOR_UNITS_PER_MAJOR
}

/// Replaces non-finite or negative prices with zero.
pub fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

/// Formats a major-unit amount as pounds sterling, e.g. `£40.50`.
pub fn format_gbp(amount: f64) -> String {
    format!("£{:.2}", amount)
}
