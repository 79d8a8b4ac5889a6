//! EMI Tracker CLI
//!
//! Command-line interface for projecting loan repayment progress

use anyhow::{anyhow, Context};
use chrono::{Local, Months, NaiveDate};
use clap::Parser;
use emi_tracker::{
    loan::load_records_csv, LoanRecord, LoanStatus, LoanStore, Schedule,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Project repayment progress for a portfolio of loans
#[derive(Debug, Parser)]
#[command(name = "emi_tracker", version)]
struct Args {
    /// Portfolio CSV to load; a built-in demo loan is used when omitted
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Valuation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Print the full amortization schedule for one loan id
    #[arg(long)]
    schedule: Option<u32>,

    /// Write per-loan statuses to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print statuses as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Stand-in portfolio when no CSV is given: one car loan a year into repayment
fn demo_records(as_of: NaiveDate) -> Vec<LoanRecord> {
    let start = as_of
        .checked_sub_months(Months::new(12))
        .expect("valid demo start date");

    vec![LoanRecord {
        id: None,
        name: "Demo Car Loan".to_string(),
        principal: 800_000.0,
        interest_rate: 8.5,
        tenure_months: 60,
        start_date: Some(start),
        explicit_completed_months: None,
    }]
}

fn print_status_table(statuses: &[LoanStatus]) {
    println!(
        "{:>4} {:<24} {:>12} {:>6} {:>7} {:>5} {:>6} {:>12} {:>14} {:>14}",
        "Id", "Name", "Principal", "Rate", "Tenure", "Done", "Left", "EMI", "Outstanding", "Paid"
    );
    println!("{}", "-".repeat(112));

    for status in statuses {
        println!(
            "{:>4} {:<24} {:>12.2} {:>6.2} {:>7} {:>5} {:>6} {:>12.2} {:>14.2} {:>14.2}",
            status.id,
            status.name,
            status.principal,
            status.interest_rate,
            status.tenure_months,
            status.completed_months,
            status.remaining_months,
            status.monthly_emi,
            status.remaining_principal,
            status.total_amount_paid,
        );
    }
}

fn print_schedule(store: &LoanStore, id: u32) -> anyhow::Result<()> {
    let loan = store.get(id).ok_or_else(|| anyhow!("no loan with id {id}"))?;
    let schedule = Schedule::for_terms(loan.principal, loan.interest_rate, loan.tenure_months);

    println!("\nAmortization schedule for loan {} ({}):", loan.id, loan.name);
    println!(
        "{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Opening", "EMI", "Interest", "Principal", "Closing"
    );
    println!("{}", "-".repeat(74));

    for row in &schedule.rows {
        println!(
            "{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month,
            row.opening_balance,
            row.emi,
            row.interest_component,
            row.principal_component,
            row.closing_balance,
        );
    }

    let totals = schedule.summary();
    println!(
        "\n  Total Paid: {:.2}  Total Interest: {:.2}  Total Principal: {:.2}",
        totals.total_paid, totals.total_interest, totals.total_principal
    );
    Ok(())
}

fn write_status_csv(path: &PathBuf, statuses: &[LoanStatus]) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(
        file,
        "Id,Name,Principal,InterestRate,TenureMonths,CompletedMonths,RemainingMonths,MonthlyEmi,RemainingPrincipal,TotalAmountPaid"
    )?;

    for status in statuses {
        writeln!(
            file,
            "{},{},{:.2},{:.4},{},{},{},{:.2},{:.2},{:.2}",
            status.id,
            status.name,
            status.principal,
            status.interest_rate,
            status.tenure_months,
            status.completed_months,
            status.remaining_months,
            status.monthly_emi,
            status.remaining_principal,
            status.total_amount_paid,
        )?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    println!("EMI Tracker v0.1.0");
    println!("==================\n");

    let records = match &args.portfolio {
        Some(path) => load_records_csv(path)
            .map_err(|err| anyhow!("failed to load {}: {err}", path.display()))?,
        None => demo_records(as_of),
    };

    let mut store = LoanStore::new();
    for record in records {
        store.add(record)?;
    }

    let statuses = store.status_all(as_of);
    println!("Portfolio as of {} ({} loans):", as_of, statuses.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        print_status_table(&statuses);
    }

    let summary = store.summary(as_of);
    println!("\nSummary:");
    println!("  Active Loans: {}", summary.active_loans);
    println!("  Completed Loans: {}", summary.completed_loans);
    println!("  Total Monthly EMI: {:.2}", summary.total_monthly_emi);
    println!("  Total Outstanding: {:.2}", summary.total_remaining_principal);
    println!("  Total Paid: {:.2}", summary.total_amount_paid);

    if let Some(id) = args.schedule {
        print_schedule(&store, id)?;
    }

    if let Some(path) = &args.output {
        write_status_csv(path, &statuses)?;
        println!("\nStatuses written to: {}", path.display());
    }

    Ok(())
}
