//! Printable daily registration report.

pub mod daily_report;

pub use daily_report::{DailyReport, PrintFormat, ReportRow};
