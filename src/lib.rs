//! EMI Tracker - amortization and repayment-progress engine for personal loans
//!
//! This library provides:
//! - Fixed monthly installment (EMI) calculation from principal, rate, and tenure
//! - Repayment progress projection, by elapsed calendar time or explicit count
//! - Single and bulk "pay one month" operations with an explicit mode transition
//! - Month-by-month amortization schedules
//! - Portfolio loading (CSV/JSON) and aggregate summaries

pub mod amortization;
pub mod error;
pub mod loan;
pub mod projection;
pub mod store;

// Re-export commonly used types
pub use amortization::{monthly_installment, remaining_balance};
pub use error::{Error, Result};
pub use loan::{Loan, LoanRecord, TrackingMode};
pub use projection::{project, LoanStatus, Schedule, ScheduleSummary};
pub use store::{LoanStore, PortfolioSummary};
