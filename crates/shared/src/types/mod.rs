//! Common types used across the application.

pub mod employees;
pub mod money;

pub use employees::EmployeeCount;
pub use money::{coerce_money, format_money, round_money, to_money_string};
