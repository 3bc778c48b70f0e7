//! Output formatting for address reports.
//!
//! This module handles rendering and writing the per subnet reports:
//! - [`markdown`] - Markdown table rendering
//! - [`report`] - Sorting and writing one report per subnet
//! - [`sink`] - Where reports go (files or memory)

mod markdown;
mod report;
mod sink;

pub use markdown::{format_cell, render_report, render_table, HEADER};
pub use report::{report_name, write_all, write_subnet_report};
pub use sink::{FileSink, MemorySink, ReportSink};
