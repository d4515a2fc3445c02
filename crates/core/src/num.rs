//! Numeric coercions matching the host framework's field semantics.
//!
//! The host treats empty numeric fields as zero, except for multiplicative
//! inputs (box count, exchange rate) which default to one. The host also
//! serializes empty numeric fields as `0` rather than null, so the
//! multiplicative default applies to an explicit zero as well.

/// Missing value reads as 0.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Missing or zero value reads as 1 (multiplicative default).
pub fn or_one(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => 1.0,
    }
}

/// Round to 2 decimal places, as the host does for published CBM totals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
