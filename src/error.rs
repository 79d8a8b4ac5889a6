//! Unified error types for the engine

use thiserror::Error;

/// Errors raised at the engine boundary
///
/// Malformed numeric ranges (non-positive principal, rate, or tenure) are
/// not errors: the installment calculation answers them with a zero
/// sentinel. The variants here cover caller programming errors and unknown
/// identifiers only.
#[derive(Debug, Error)]
pub enum Error {
    /// Record carries neither a start date nor an explicit completed count
    #[error("loan record has no tracking mode: set start_date or explicit_completed_months")]
    TrackingModeMissing,

    /// Record carries both tracking fields at once
    #[error("loan record has conflicting tracking modes: start_date and explicit_completed_months are mutually exclusive")]
    TrackingModeConflict,

    /// Display label is blank
    #[error("loan name must not be empty")]
    EmptyName,

    /// Single-loan store operation addressed an unknown id
    #[error("no loan with id {0}")]
    LoanNotFound(u32),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
