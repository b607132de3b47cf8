//! Revenue distribution.
//!
//! The single place where the 60/40 split is expressed. Everything that shows
//! or exports figures (listing summary, printable report) goes through
//! [`RevenueDistributor`], so the numbers cannot drift between surfaces.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::{RevenueDistributor, compute_breakdown};
pub use types::{EMPLOYEE_RATE, OWNER_RATE, RevenueBreakdown};
