//! Report output.
//!
//! The report is written once, after every batch has completed.

mod csv;

pub use self::csv::{write_report, write_report_to_path};
