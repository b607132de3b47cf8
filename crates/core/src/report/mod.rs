//! Printable revenue report.
//!
//! Builds the exported summary from a record view: headline figures from the
//! revenue distributor, then one row per record, paginated for printing.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{ROWS_PER_PAGE, ReportRow, SummaryReport};
