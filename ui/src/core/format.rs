//! Formatting helpers for presenting analysis figures and listings.

/// Percentage with one decimal place. Missing values read as `0%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.1}%"),
        _ => "0%".to_string(),
    }
}

/// Coordinate value as entered into the form (four decimals, roughly 11 m).
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.4}")
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_price_range(min: &str, max: &str) -> String {
    format!("₹{} - ₹{}", min.trim(), max.trim())
}
