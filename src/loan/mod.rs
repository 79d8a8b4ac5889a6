//! Loan data structures and portfolio loading

mod data;
pub mod loader;

pub use data::{elapsed_calendar_months, Loan, LoanRecord, TrackingMode};
pub use loader::{load_records_csv, load_records_csv_from_reader, load_records_json};
