use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Static lookup table mapping known field-name aliases to canonical names.
/// Lookups are exact-match and case-sensitive; anything not listed falls back
/// to the lower-cased original key.
pub static KEY_MAPPINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Invoice number variations
        ("inv_no", "invoice_number"),
        ("invoice_no", "invoice_number"),
        ("InvoiceNumber", "invoice_number"),
        ("invoice_num", "invoice_number"),
        ("inv_id", "invoice_number"),
        // Date variations
        ("inv_date", "invoice_date"),
        ("date", "invoice_date"),
        ("InvoiceDate", "invoice_date"),
        ("issue_date", "invoice_date"),
        // Amount variations
        ("amt", "amount"),
        ("total", "amount"),
        ("InvoiceAmount", "amount"),
        ("invoice_amt", "amount"),
        ("price", "amount"),
        // Customer variations
        ("cust", "customer"),
        ("client", "customer"),
        ("CustomerName", "customer"),
        ("buyer", "customer"),
    ])
});

/// Rewrite every key of a record to its canonical form. Values are copied
/// unchanged; nested structures are not recursed into. Two input keys that map
/// to the same canonical name collide last-write-wins in input order.
pub fn normalize_keys(invoice: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::new();
    for (key, value) in invoice {
        let canonical = KEY_MAPPINGS
            .get(key.as_str())
            .map(|mapped| mapped.to_string())
            .unwrap_or_else(|| key.to_lowercase());
        normalized.insert(canonical, value.clone());
    }
    normalized
}
