//! Authoritative in-memory loan store
//!
//! Owns the loan records and applies every mutation; projection stays a
//! stateless transform layered on top, and no derived field is ever trusted
//! back from storage. Callers are responsible for serializing concurrent
//! mutations against the same loan id.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loan::{Loan, LoanRecord};
use crate::projection::{project, LoanStatus};

/// Aggregate view across a portfolio
///
/// Monthly and outstanding totals cover active loans only; completed loans
/// contribute to the paid total and the completed count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub active_loans: usize,
    pub completed_loans: usize,

    /// Combined monthly outgo across active loans
    pub total_monthly_emi: f64,

    /// Combined outstanding balance across active loans
    pub total_remaining_principal: f64,

    /// Combined amount paid to date across all loans
    pub total_amount_paid: f64,
}

/// Single authoritative owner of loan records
#[derive(Debug, Clone)]
pub struct LoanStore {
    loans: Vec<Loan>,
    next_id: u32,
}

impl LoanStore {
    pub fn new() -> Self {
        Self {
            loans: Vec::new(),
            next_id: 1,
        }
    }

    /// Admit a record, assigning the next free id
    ///
    /// Validates the tracking-mode contract and the display name; the
    /// record's own `id` field is ignored. Returns the assigned id.
    pub fn add(&mut self, record: LoanRecord) -> Result<u32> {
        let id = self.next_id;
        let loan = record.into_loan(id)?;
        log::info!("registered loan {} ({})", id, loan.name);

        self.next_id += 1;
        self.loans.push(loan);
        Ok(id)
    }

    /// Look up a loan by id
    pub fn get(&self, id: u32) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    /// Remove a loan; returns whether anything was deleted
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.loans.len();
        self.loans.retain(|loan| loan.id != id);
        let removed = self.loans.len() < before;
        if removed {
            log::info!("deleted loan {}", id);
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// Record one paid installment against a loan
    ///
    /// Unknown ids are an error. Paying an already completed loan changes
    /// nothing but still returns a fresh status snapshot.
    pub fn pay(&mut self, id: u32, as_of: NaiveDate) -> Result<LoanStatus> {
        let loan = self
            .loans
            .iter_mut()
            .find(|loan| loan.id == id)
            .ok_or(Error::LoanNotFound(id))?;

        if loan.pay_one_month(as_of) {
            log::debug!(
                "loan {} advanced to {} completed months",
                id,
                loan.completed_months(as_of)
            );
        }

        Ok(project(loan, as_of))
    }

    /// Record one paid installment against every listed loan
    ///
    /// Equivalent to calling [`LoanStore::pay`] once per id, in any order:
    /// each loan advances independently, and ids that are unknown or already
    /// completed are silently skipped. Returns how many loans advanced.
    pub fn pay_bulk(&mut self, ids: &[u32], as_of: NaiveDate) -> usize {
        let mut advanced = 0;
        for &id in ids {
            if let Some(loan) = self.loans.iter_mut().find(|loan| loan.id == id) {
                if loan.pay_one_month(as_of) {
                    advanced += 1;
                }
            }
        }

        if advanced > 0 {
            log::info!("bulk payment advanced {} of {} loans", advanced, ids.len());
        }
        advanced
    }

    /// Project the whole portfolio as of a date
    pub fn status_all(&self, as_of: NaiveDate) -> Vec<LoanStatus> {
        self.loans.par_iter().map(|loan| project(loan, as_of)).collect()
    }

    /// Aggregate the portfolio as of a date
    pub fn summary(&self, as_of: NaiveDate) -> PortfolioSummary {
        let mut summary = PortfolioSummary {
            active_loans: 0,
            completed_loans: 0,
            total_monthly_emi: 0.0,
            total_remaining_principal: 0.0,
            total_amount_paid: 0.0,
        };

        for status in self.status_all(as_of) {
            summary.total_amount_paid += status.total_amount_paid;
            if status.is_completed() {
                summary.completed_loans += 1;
            } else {
                summary.active_loans += 1;
                summary.total_monthly_emi += status.monthly_emi;
                summary.total_remaining_principal += status.remaining_principal;
            }
        }

        summary
    }
}

impl Default for LoanStore {
    fn default() -> Self {
        Self::new()
    }
}
