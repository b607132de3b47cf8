//! Record keeping workflow.
//!
//! This module implements the ledger around the distributor:
//! - The in-memory record set and employee-count setting ([`Ledger`])
//! - Add, edit, and delete by stored position
//! - Breakdowns over the full set or a filtered view
//! - The load, mutate, save cycle against a [`RecordStore`](crate::storage::RecordStore)

pub mod book;
pub mod error;
pub mod service;

pub use book::Ledger;
pub use error::LedgerError;
pub use service::LedgerService;
