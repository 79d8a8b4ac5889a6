//! Repayment progress projection for a single loan

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amortization::{monthly_installment, remaining_balance};
use crate::loan::{Loan, TrackingMode};

/// Snapshot of a loan's repayment state as of a given date
///
/// Carries the loan's own fields plus every derived value. All derived
/// fields are recomputed on each projection; storage layers may cache them
/// for display, but the projector is the only legitimate producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanStatus {
    pub id: u32,
    pub name: String,
    pub principal: f64,
    pub interest_rate: f64,
    pub tenure_months: u32,

    /// Populated for date-tracked loans
    pub start_date: Option<NaiveDate>,

    /// Populated for manually tracked loans
    pub explicit_completed_months: Option<u32>,

    // Derived fields
    pub completed_months: u32,
    pub remaining_months: u32,
    pub monthly_emi: f64,
    pub remaining_principal: f64,
    pub total_amount_paid: f64,
}

impl LoanStatus {
    /// Terminal state: every installment accounted for
    pub fn is_completed(&self) -> bool {
        self.completed_months >= self.tenure_months
    }
}

/// Project a loan's repayment state as of a date
///
/// Deterministic and idempotent: the same loan and date always produce the
/// same snapshot. The installment is recomputed from the loan's static
/// terms rather than cached, so staleness is impossible. Total paid is the
/// simple product `installment * completed months`, an approximation that
/// assumes every installment equalled the computed EMI.
pub fn project(loan: &Loan, as_of: NaiveDate) -> LoanStatus {
    let completed = loan.completed_months(as_of);
    let monthly_emi = monthly_installment(loan.principal, loan.interest_rate, loan.tenure_months);

    let (start_date, explicit_completed_months) = match loan.tracking {
        TrackingMode::DateTracked(start) => (Some(start), None),
        TrackingMode::ManualTracked(count) => (None, Some(count)),
    };

    LoanStatus {
        id: loan.id,
        name: loan.name.clone(),
        principal: loan.principal,
        interest_rate: loan.interest_rate,
        tenure_months: loan.tenure_months,
        start_date,
        explicit_completed_months,
        completed_months: completed,
        remaining_months: loan.tenure_months - completed,
        monthly_emi,
        remaining_principal: remaining_balance(
            loan.principal,
            loan.interest_rate,
            loan.tenure_months,
            completed,
        ),
        total_amount_paid: monthly_emi * f64::from(completed),
    }
}
