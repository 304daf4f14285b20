/// Render an hour value without trailing zeros: `2.0` becomes `"2"`, `1.50` becomes `"1.5"`
pub fn format_hours(hours: f64) -> String {
    let rounded = format!("{:.2}", hours);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Cut `text` to at most `max` characters, ending with `...` when shortened
pub fn truncate_string(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }

    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Left-align `text` in a column of `width` characters
pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
