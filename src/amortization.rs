//! Shared amortization math: fixed installment and outstanding balance
//!
//! Every consumer (the progress projector, the schedule builder, the store,
//! and any interactive preview) delegates to these functions, so the formula
//! exists in exactly one place.

/// Monthly interest rate from an annual percentage rate
pub(crate) fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

/// Fixed monthly installment (EMI) for a loan
///
/// Standard fixed-installment amortization:
/// `EMI = P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
///
/// A non-positive principal or rate, or a zero tenure, yields `0.0`: the
/// "not computable yet" sentinel used while a form is still incomplete.
/// No error is raised for such inputs.
pub fn monthly_installment(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> f64 {
    if principal <= 0.0 || annual_rate_pct <= 0.0 || tenure_months == 0 {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_pct);
    let growth = (1.0 + r).powi(tenure_months as i32);
    principal * r * growth / (growth - 1.0)
}

/// Closed-form outstanding balance after `completed` installments
///
/// `B = P * ((1+r)^n - (1+r)^p) / ((1+r)^n - 1)`
///
/// The boundaries skip the formula entirely: zero completed months return
/// the principal exactly and a fully retired loan returns exactly `0.0`.
/// Degenerate terms fall back to `0.0`, matching the installment sentinel.
pub fn remaining_balance(
    principal: f64,
    annual_rate_pct: f64,
    tenure_months: u32,
    completed: u32,
) -> f64 {
    if principal <= 0.0 || annual_rate_pct <= 0.0 || tenure_months == 0 {
        return 0.0;
    }
    if completed == 0 {
        return principal;
    }
    if completed >= tenure_months {
        return 0.0;
    }

    let r = monthly_rate(annual_rate_pct);
    let growth_full = (1.0 + r).powi(tenure_months as i32);
    let growth_paid = (1.0 + r).powi(completed as i32);

    // Negative results are only possible from rounding at the extremes
    (principal * (growth_full - growth_paid) / (growth_full - 1.0)).max(0.0)
}
