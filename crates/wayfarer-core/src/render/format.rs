//! Shared value-formatting helpers for the renderers.

use wayfarer_types::listing::PriceValue;

/// Sentinel shown for missing numeric-ish fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a count-like field (bedrooms, guests, reviews). Whole numbers
/// drop the float tail; missing values render the sentinel.
pub fn format_count(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
    }
}

/// Format a star rating to one decimal place.
pub fn format_stars(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) => format!("{v:.1}"),
    }
}

/// Format a price cell: numeric values get comma thousands grouping with
/// zero fractional digits (half-up rounding); non-numeric values are shown
/// raw and unchanged; missing values render the sentinel.
pub fn format_price(price: &PriceValue) -> String {
    match price {
        PriceValue::Missing => NOT_AVAILABLE.to_string(),
        PriceValue::Numeric(amount) => group_thousands(amount.round() as i64),
        PriceValue::Raw(raw) => raw.clone(),
    }
}

/// Insert comma separators every three digits.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render one table cell: strings appear without quotes, whole-number
/// floats without the `.0` tail, null as an empty cell.
pub fn value_to_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && n.as_i64().is_none() => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
