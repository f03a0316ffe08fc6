use serde_json::{Number, Value};
use tracing::warn;

/// Convert a monetary value into a plain decimal number. Currency symbols,
/// letters, and spacing are stripped; regional separator conventions are
/// reconciled heuristically:
///
/// - comma but no period: comma is the decimal point (`1234,56`)
/// - comma and period: commas are thousands separators (`1,234.56`)
///
/// Numbers pass straight through as floats. A string that still fails to
/// parse after cleaning is returned unchanged so the raw data stays available
/// downstream.
pub fn normalize_amount(value: &Value) -> Value {
    let raw = match value {
        Value::Null => return Value::Null,
        Value::Number(number) => {
            return match number.as_f64().and_then(Number::from_f64) {
                Some(float) => Value::Number(float),
                None => value.clone(),
            };
        }
        Value::String(s) => s.trim(),
        other => {
            warn!("Could not parse amount: {}", other);
            return value.clone();
        }
    };

    if raw.is_empty() {
        return Value::Null;
    }

    // Strip currency symbols, letters, and spaces (including non-breaking):
    // "$1,234.56", "EUR 1.234,56", "1 234,56 €" all reduce to digit runs.
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if cleaned.contains(',') && !cleaned.contains('.') {
        // European decimal comma
        cleaned = cleaned.replace(',', ".");
    } else if cleaned.contains(',') {
        // Both present: treat commas as thousands separators
        cleaned = cleaned.replace(',', "");
    }

    match cleaned.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(float) => Value::Number(float),
        None => {
            warn!("Could not parse amount: {}", raw);
            value.clone()
        }
    }
}
