//! Formatting helpers shared by the views

use chrono::{DateTime, NaiveDateTime};

/// Render a server timestamp as `Mar 1, 2025`
///
/// Accepts RFC 3339 and naive ISO timestamps (the backend omits the offset).
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(|value| {
        let value = value.trim();
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    })
    .map(|dt| dt.format("%b %-d, %Y").to_string())
    .unwrap_or_else(|| "Unknown date".to_string())
}

/// `1.0` → `"1"`, `2.5` → `"2.5"`
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        quantity.to_string()
    }
}

/// `"1 like"` / `"3 likes"`
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-03-01T12:30:00Z")), "Mar 1, 2025");
        assert_eq!(format_date(Some("2024-12-24T08:00:00.123456")), "Dec 24, 2024");
        assert_eq!(format_date(Some("yesterday")), "Unknown date");
        assert_eq!(format_date(None), "Unknown date");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1.0), "1");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(12.0), "12");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "like", "likes"), "1 like");
        assert_eq!(pluralize(0, "like", "likes"), "0 likes");
    }
}
