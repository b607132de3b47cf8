//! Shared types, errors, and configuration for Washledger.
//!
//! This crate provides common types used across all other crates:
//! - Money helpers with decimal precision (coercion, rounding, formatting)
//! - The employee-count setting type
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LedgerVariant};
pub use error::{AppError, AppResult};
