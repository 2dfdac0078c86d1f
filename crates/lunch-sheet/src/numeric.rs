//! Numeric coercion for spreadsheet cells

/// Best-effort number from a cell, `0.0` when it is not a finite number
///
/// Surrounding whitespace is ignored and an empty cell is zero.
pub fn parse_or_zero(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Format a total the way the sheet shows it: `13`, `12.5`
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
