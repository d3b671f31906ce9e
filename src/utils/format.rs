use chrono::{DateTime, NaiveDateTime};

const NOT_AVAILABLE: &str = "Not available";

/// Capitalizes the first character; missing or blank text becomes "Not available".
pub fn format_text(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => {
            let mut chars = t.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => NOT_AVAILABLE.to_string(),
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Lower-cases, drops everything except ASCII word characters, whitespace,
/// `,` `.` `-`, and collapses whitespace runs into single spaces.
pub fn clean_symptoms(raw: &str) -> String {
    let filtered: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace() || matches!(c, ',' | '.' | '-')
        })
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 100.0)
}

pub fn confidence_bar(confidence: f64, width: usize) -> String {
    let filled = ((clamp_confidence(confidence) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Zero and missing prices both render as "N/A".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 && p.is_finite() => format!("{:.2}", p),
        _ => "N/A".to_string(),
    }
}

/// Accepts RFC 3339 timestamps and SQLite's `YYYY-MM-DD HH:MM:SS` form;
/// anything else is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}
