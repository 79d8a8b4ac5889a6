//! Loan data structures and calendar timing helpers

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a loan's repayment progress is tracked
///
/// Exactly one mode is active per loan. Date-tracked loans derive their
/// completed-month count from the clock on every read; manually tracked
/// loans carry an explicitly stored count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingMode {
    /// Progress derived from elapsed calendar months since the start date
    DateTracked(NaiveDate),
    /// Progress is an explicitly stored completed-month count
    ManualTracked(u32),
}

/// A registered loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier, assigned by the owning store
    pub id: u32,

    /// Display label
    pub name: String,

    /// Original borrowed sum
    pub principal: f64,

    /// Annual percentage rate
    pub interest_rate: f64,

    /// Total number of installments
    pub tenure_months: u32,

    /// Active tracking mode
    pub tracking: TrackingMode,
}

/// Whole calendar months elapsed between two dates, ignoring day-of-month
///
/// A loan started on the 31st and evaluated on the 1st of the following
/// month already counts one elapsed month. Negative when `start` lies after
/// `as_of`.
pub fn elapsed_calendar_months(start: NaiveDate, as_of: NaiveDate) -> i32 {
    (as_of.year() - start.year()) * 12 + (as_of.month() as i32 - start.month() as i32)
}

impl Loan {
    /// Completed installments as of a date, clamped into `[0, tenure_months]`
    pub fn completed_months(&self, as_of: NaiveDate) -> u32 {
        let raw = match self.tracking {
            TrackingMode::ManualTracked(count) => i64::from(count),
            TrackingMode::DateTracked(start) => i64::from(elapsed_calendar_months(start, as_of)),
        };
        raw.clamp(0, i64::from(self.tenure_months)) as u32
    }

    /// Installments still owed as of a date
    pub fn remaining_months(&self, as_of: NaiveDate) -> u32 {
        self.tenure_months - self.completed_months(as_of)
    }

    /// Whether further installments remain as of a date
    pub fn is_active(&self, as_of: NaiveDate) -> bool {
        self.completed_months(as_of) < self.tenure_months
    }

    /// Record one paid installment
    ///
    /// Pins the loan to `ManualTracked(current + 1)`: a date-tracked loan
    /// stops following the clock from the first hand-paid month onward, and
    /// only further explicit payments advance it. Returns `false` without
    /// touching the loan if it is already completed; the count never
    /// decrements or wraps.
    pub fn pay_one_month(&mut self, as_of: NaiveDate) -> bool {
        let current = self.completed_months(as_of);
        if current >= self.tenure_months {
            return false;
        }
        self.tracking = TrackingMode::ManualTracked(current + 1);
        true
    }
}

/// Flat loan record as exchanged with storage and transport layers
///
/// Exactly one of `start_date` and `explicit_completed_months` must be
/// present; the pair collapses into a [`TrackingMode`] when the record is
/// admitted. Derived fields never travel on this record; they are
/// recomputed by the projector on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Present on records read back from a store; ignored on creation
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub principal: f64,
    pub interest_rate: f64,
    pub tenure_months: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub explicit_completed_months: Option<u32>,
}

impl LoanRecord {
    /// Validate the record and build a [`Loan`] carrying the given id
    ///
    /// Fails fast on the caller programming errors: a record with both
    /// tracking fields, with neither, or with a blank name.
    pub fn into_loan(self, id: u32) -> Result<Loan, Error> {
        let tracking = match (self.start_date, self.explicit_completed_months) {
            (Some(_), Some(_)) => return Err(Error::TrackingModeConflict),
            (None, None) => return Err(Error::TrackingModeMissing),
            (Some(start), None) => TrackingMode::DateTracked(start),
            (None, Some(count)) => TrackingMode::ManualTracked(count),
        };

        if self.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }

        Ok(Loan {
            id,
            name: self.name,
            principal: self.principal,
            interest_rate: self.interest_rate,
            tenure_months: self.tenure_months,
            tracking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn date_loan(start: NaiveDate) -> Loan {
        Loan {
            id: 1,
            name: "Car Loan".to_string(),
            principal: 800_000.0,
            interest_rate: 8.5,
            tenure_months: 60,
            tracking: TrackingMode::DateTracked(start),
        }
    }

    #[test]
    fn test_elapsed_months_ignores_day_of_month() {
        // Started on the 31st, evaluated on the 1st: one month elapsed
        assert_eq!(elapsed_calendar_months(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(elapsed_calendar_months(date(2024, 1, 1), date(2024, 1, 31)), 0);
        assert_eq!(elapsed_calendar_months(date(2024, 1, 15), date(2025, 2, 20)), 13);
    }

    #[test]
    fn test_elapsed_months_negative_for_future_start() {
        assert_eq!(elapsed_calendar_months(date(2030, 1, 1), date(2026, 8, 6)), -41);
    }

    #[test]
    fn test_completed_months_thirteen_calendar_months() {
        let loan = date_loan(date(2025, 7, 6));
        assert_eq!(loan.completed_months(date(2026, 8, 6)), 13);
    }

    #[test]
    fn test_completed_months_future_start_clamps_to_zero() {
        let loan = date_loan(date(2030, 1, 1));
        assert_eq!(loan.completed_months(date(2026, 8, 6)), 0);
        assert_eq!(loan.remaining_months(date(2026, 8, 6)), 60);
    }

    #[test]
    fn test_completed_months_clamps_to_tenure() {
        // Started far enough back that raw elapsed months exceed the tenure
        let loan = date_loan(date(2010, 1, 1));
        let as_of = date(2026, 8, 6);
        assert_eq!(loan.completed_months(as_of), 60);
        assert!(!loan.is_active(as_of));

        let mut manual = date_loan(date(2025, 1, 1));
        manual.tracking = TrackingMode::ManualTracked(999);
        assert_eq!(manual.completed_months(as_of), 60);
    }

    #[test]
    fn test_pay_one_month_pins_date_tracked_loan() {
        let mut loan = date_loan(date(2025, 8, 6));
        let as_of = date(2026, 8, 6);
        assert_eq!(loan.completed_months(as_of), 12);

        assert!(loan.pay_one_month(as_of));
        assert_eq!(loan.tracking, TrackingMode::ManualTracked(13));

        // The count is now pinned: reading a year later does not advance it
        assert_eq!(loan.completed_months(date(2027, 8, 6)), 13);

        assert!(loan.pay_one_month(as_of));
        assert_eq!(loan.tracking, TrackingMode::ManualTracked(14));
    }

    #[test]
    fn test_pay_one_month_noop_when_completed() {
        let mut loan = date_loan(date(2025, 1, 1));
        loan.tracking = TrackingMode::ManualTracked(60);
        let as_of = date(2026, 8, 6);

        assert!(!loan.pay_one_month(as_of));
        assert_eq!(loan.tracking, TrackingMode::ManualTracked(60));
    }

    #[test]
    fn test_record_mode_validation() {
        let record = LoanRecord {
            id: None,
            name: "Home Loan".to_string(),
            principal: 2_500_000.0,
            interest_rate: 9.1,
            tenure_months: 240,
            start_date: Some(date(2024, 6, 1)),
            explicit_completed_months: None,
        };
        let loan = record.clone().into_loan(7).unwrap();
        assert_eq!(loan.id, 7);
        assert_eq!(loan.tracking, TrackingMode::DateTracked(date(2024, 6, 1)));

        let mut both = record.clone();
        both.explicit_completed_months = Some(4);
        assert!(matches!(both.into_loan(8), Err(Error::TrackingModeConflict)));

        let mut neither = record.clone();
        neither.start_date = None;
        assert!(matches!(neither.into_loan(9), Err(Error::TrackingModeMissing)));

        let mut blank = record;
        blank.name = "   ".to_string();
        assert!(matches!(blank.into_loan(10), Err(Error::EmptyName)));
    }
}
