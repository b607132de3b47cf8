//! Service records: one per vehicle job.

mod serde_text;
pub mod types;

pub use types::{NewRecord, RecordEdit, TransactionRecord};
