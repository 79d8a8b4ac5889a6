//! Progress projection and amortization schedules

mod engine;
mod schedule;

pub use engine::{project, LoanStatus};
pub use schedule::{Schedule, ScheduleRow, ScheduleSummary};
