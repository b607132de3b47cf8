//! Core business logic for Washledger.
//!
//! The revenue distributor is pure and synchronous; everything else builds on
//! it. Storage sits behind the [`storage::RecordStore`] trait.
//!
//! # Modules
//!
//! - `distribution` - Gross/supply totals and the 40/60 revenue split
//! - `record` - Service records and their stored format
//! - `filter` - Date, type, and text filters over the record list
//! - `ledger` - Add, edit, and delete records; load-mutate-save workflows
//! - `storage` - Record persistence on OpenDAL
//! - `report` - Printable summary export

pub mod distribution;
pub mod filter;
pub mod ledger;
pub mod record;
pub mod report;
pub mod storage;
