pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod server;

pub use normalize::{normalize_amount, normalize_date, normalize_invoice_data, process_invoice};
