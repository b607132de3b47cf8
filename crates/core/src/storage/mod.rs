//! Record storage using Apache OpenDAL.
//!
//! Key-value persistence for the record list, the employee-count setting,
//! and exported reports. Backends:
//! - Local filesystem (default)
//! - In-memory (tests, dry runs)
//!
//! # Layout
//!
//! ```text
//! <root>/registrosVehiculosAvanzado   JSON array of records (advanced)
//! <root>/registrosVehiculos           JSON array of records (baseline)
//! <root>/numEmpleadosActual           employee count as bare integer text
//! <root>/reports/<file>               exported summaries
//! ```

mod config;
mod error;
mod service;
mod store;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::OpendalRecordStore;
pub use store::RecordStore;
