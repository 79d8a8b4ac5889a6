//! Month-by-month amortization schedule

use serde::{Deserialize, Serialize};

use crate::amortization::{monthly_installment, monthly_rate};

/// One installment's split between interest and principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Installment number (1-indexed)
    pub month: u32,
    pub opening_balance: f64,
    pub emi: f64,
    pub interest_component: f64,
    pub principal_component: f64,
    pub closing_balance: f64,
}

/// Totals across a full schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}

/// Full amortization schedule for a loan's static terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    /// Build the schedule for the given terms
    ///
    /// Each installment splits into interest on the opening balance and the
    /// principal portion that retires it. The final installment retires
    /// whatever balance remains, so the schedule always closes at exactly
    /// zero. Degenerate terms (the zero-installment sentinel) yield an
    /// empty schedule.
    pub fn for_terms(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Self {
        let emi = monthly_installment(principal, annual_rate_pct, tenure_months);
        if emi <= 0.0 {
            return Self { rows: Vec::new() };
        }

        let r = monthly_rate(annual_rate_pct);
        let mut rows = Vec::with_capacity(tenure_months as usize);
        let mut balance = principal;

        for month in 1..=tenure_months {
            let interest = balance * r;
            let principal_component = if month == tenure_months {
                balance
            } else {
                emi - interest
            };
            let closing = (balance - principal_component).max(0.0);

            rows.push(ScheduleRow {
                month,
                opening_balance: balance,
                emi,
                interest_component: interest,
                principal_component,
                closing_balance: closing,
            });

            balance = closing;
        }

        Self { rows }
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            months: self.rows.len() as u32,
            total_paid: self.rows.iter().map(|row| row.emi).sum(),
            total_interest: self.rows.iter().map(|row| row.interest_component).sum(),
            total_principal: self.rows.iter().map(|row| row.principal_component).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::remaining_balance;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_retires_balance() {
        let schedule = Schedule::for_terms(800_000.0, 8.5, 60);
        assert_eq!(schedule.rows.len(), 60);

        let last = schedule.rows.last().unwrap();
        assert_eq!(last.closing_balance, 0.0);

        // Principal components must reassemble the borrowed sum
        let summary = schedule.summary();
        assert_relative_eq!(summary.total_principal, 800_000.0, max_relative = 1e-9);
        assert!(summary.total_interest > 0.0);
    }

    #[test]
    fn test_schedule_agrees_with_closed_form_balance() {
        let schedule = Schedule::for_terms(800_000.0, 8.5, 60);
        for &completed in &[1usize, 12, 30, 59] {
            let iterated = schedule.rows[completed - 1].closing_balance;
            let closed_form = remaining_balance(800_000.0, 8.5, 60, completed as u32);
            assert_relative_eq!(iterated, closed_form, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_schedule_interest_declines() {
        let schedule = Schedule::for_terms(800_000.0, 8.5, 60);
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].interest_component < pair[0].interest_component);
        }
    }

    #[test]
    fn test_schedule_empty_for_degenerate_terms() {
        assert!(Schedule::for_terms(0.0, 8.5, 60).rows.is_empty());
        assert!(Schedule::for_terms(800_000.0, 0.0, 60).rows.is_empty());
        assert!(Schedule::for_terms(800_000.0, 8.5, 0).rows.is_empty());
    }
}
