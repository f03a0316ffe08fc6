use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

/// Ordered catalog of date formats tried first-match-wins. The order is part
/// of the contract: an ambiguous string like `01/02/2023` resolves day-first
/// because `%d/%m/%Y` is listed before `%m/%d/%Y`.
pub const DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%Y/%m/%d",
    "%d %B %Y",
];

// Fallback for strings no catalog format matches whole, e.g. "2023-5-7 10:00"
// or "due on 7/5/2025": three numeric groups split by '/', '.', or '-'.
static DATE_FALLBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,4})[/.-](\d{1,2})[/.-](\d{1,4})").unwrap());

/// Convert a date value in an unknown format into a canonical `YYYY-MM-DD`
/// string. Null and non-string/non-number inputs become null; strings that
/// defeat both the catalog and the fallback are returned trimmed but
/// otherwise verbatim so no data is discarded.
pub fn normalize_date(value: &Value) -> Value {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Value::Null,
    };

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&raw, format) {
            return Value::String(date.format("%Y-%m-%d").to_string());
        }
    }

    // No catalog format consumed the whole string; look for the first embedded
    // numeric-triple and decide which group is the year.
    if let Some(caps) = DATE_FALLBACK.captures(&raw) {
        let parts: Vec<i64> = (1..=3)
            .filter_map(|i| caps.get(i))
            .filter_map(|group| group.as_str().parse().ok())
            .collect();
        if parts.len() == 3 {
            if parts[0] > 1000 {
                // Year leads: 2023-5-7
                return Value::String(format!(
                    "{:04}-{:02}-{:02}",
                    parts[0], parts[1], parts[2]
                ));
            } else if parts[2] > 1000 {
                // Year trails: 07-05-2025 is day-month-year
                return Value::String(format!(
                    "{:04}-{:02}-{:02}",
                    parts[2], parts[1], parts[0]
                ));
            }
        }
    }

    warn!("Could not parse date: {}", raw);
    Value::String(raw)
}
