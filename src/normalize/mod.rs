//! Normalization engine: canonical key names, `YYYY-MM-DD` dates, and plain
//! decimal amounts, with pass-through on anything it cannot interpret.

pub mod amounts;
pub mod dates;
pub mod keys;

pub use amounts::normalize_amount;
pub use dates::normalize_date;
pub use keys::normalize_keys;

use serde_json::{Map, Value};
use tracing::{error, warn};

/// Canonical fields holding dates.
const DATE_FIELDS: [&str; 2] = ["invoice_date", "due_date"];

/// Canonical fields holding monetary values.
const AMOUNT_FIELDS: [&str; 3] = ["amount", "tax", "subtotal"];

/// Normalize a single invoice record: keys first, then the recognized date
/// and amount fields. Unrecognized fields keep their values untouched. This
/// never fails; field normalizers degrade to pass-through.
pub fn process_invoice(invoice: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = normalize_keys(invoice);

    for field in DATE_FIELDS {
        if let Some(value) = normalized.get(field) {
            let replacement = normalize_date(value);
            normalized.insert(field.to_string(), replacement);
        }
    }

    for field in AMOUNT_FIELDS {
        if let Some(value) = normalized.get(field) {
            let replacement = normalize_amount(value);
            normalized.insert(field.to_string(), replacement);
        }
    }

    normalized
}

/// Normalize a decoded JSON document holding either a single invoice object
/// or a list of invoices. The top-level shape is preserved: object in, object
/// out; list in, list out. Any other shape is logged and passed through.
pub fn normalize_invoice_data(input: &Value) -> Value {
    match input {
        Value::Array(invoices) => Value::Array(
            invoices
                .iter()
                .map(|item| match item {
                    Value::Object(invoice) => Value::Object(process_invoice(invoice)),
                    other => {
                        warn!("Skipping non-object list element: {}", other);
                        other.clone()
                    }
                })
                .collect(),
        ),
        Value::Object(invoice) => Value::Object(process_invoice(invoice)),
        other => {
            error!("Unexpected data format: {}", other);
            other.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_invoice_end_to_end() {
        let input = json!({
            "inv_no": "A1",
            "InvoiceDate": "25/12/2023",
            "amt": "1234,56"
        });

        let output = normalize_invoice_data(&input);

        assert_eq!(output["invoice_number"], json!("A1"));
        assert_eq!(output["invoice_date"], json!("2023-12-25"));
        assert_eq!(output["amount"].as_f64(), Some(1234.56));
    }

    #[test]
    fn test_due_date_also_normalized() {
        let input = json!({
            "invoice_date": "01/02/2023",
            "due_date": "Mar 1, 2023"
        });

        let output = normalize_invoice_data(&input);

        assert_eq!(output["invoice_date"], json!("2023-02-01"));
        assert_eq!(output["due_date"], json!("2023-03-01"));
    }

    #[test]
    fn test_tax_and_subtotal_normalized_independently() {
        let input = json!({
            "subtotal": "$100.00",
            "tax": "8,25"
        });

        let output = normalize_invoice_data(&input);

        assert_eq!(output["subtotal"].as_f64(), Some(100.0));
        assert_eq!(output["tax"].as_f64(), Some(8.25));
        assert!(output.get("amount").is_none());
    }

    #[test]
    fn test_missing_amount_not_added() {
        let input = json!({"invoice_number": "X"});

        let output = normalize_invoice_data(&input);

        assert!(output.get("amount").is_none());
        assert_eq!(output["invoice_number"], json!("X"));
    }

    #[test]
    fn test_null_amount_stays_null() {
        let input = json!({"amount": null});

        let output = normalize_invoice_data(&input);

        assert_eq!(output["amount"], Value::Null);
    }

    #[test]
    fn test_list_shape_preserved() {
        let input = json!([
            {"inv_no": "1", "amt": 10},
            {"inv_no": "2", "amt": 20}
        ]);

        let output = normalize_invoice_data(&input);

        let items = output.as_array().expect("expected a list");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["invoice_number"], json!("1"));
        assert_eq!(items[1]["invoice_number"], json!("2"));
    }

    #[test]
    fn test_scalar_shape_passes_through() {
        assert_eq!(normalize_invoice_data(&json!("foo")), json!("foo"));
        assert_eq!(normalize_invoice_data(&json!(7)), json!(7));
        assert_eq!(normalize_invoice_data(&Value::Null), Value::Null);
    }

    #[test]
    fn test_non_object_list_element_passes_through() {
        let input = json!([{"inv_no": "1"}, "stray"]);

        let output = normalize_invoice_data(&input);

        let items = output.as_array().expect("expected a list");
        assert_eq!(items[0]["invoice_number"], json!("1"));
        assert_eq!(items[1], json!("stray"));
    }

    #[test]
    fn test_unrecognized_fields_untouched() {
        let input = json!({
            "Notes": "net 30",
            "line_items": [{"sku": "A", "qty": 1}]
        });

        let output = normalize_invoice_data(&input);

        assert_eq!(output["notes"], json!("net 30"));
        assert_eq!(output["line_items"], json!([{"sku": "A", "qty": 1}]));
    }

    #[test]
    fn test_normalization_idempotent_on_canonical_input() {
        let input = json!({
            "invoice_number": "A1",
            "invoice_date": "2023-12-25",
            "amount": 1234.56
        });

        let once = normalize_invoice_data(&input);
        let twice = normalize_invoice_data(&once);

        assert_eq!(once, twice);
    }
}
