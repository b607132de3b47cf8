//! Distribution data types.

use rust_decimal::Decimal;
use serde::Serialize;
use washledger_shared::types::{EmployeeCount, round_money};

/// Share of gross income owed to the owner, before supplies are deducted.
pub const OWNER_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);

/// Share of gross income owed to the employee pool. Supplies never reduce it.
pub const EMPLOYEE_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Derived figures for a set of records.
///
/// Transient: recomputed on every refresh, never persisted. Values carry full
/// precision; use [`RevenueBreakdown::rounded`] for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueBreakdown {
    /// Sum of charged amounts.
    pub gross_total: Decimal,
    /// Sum of supply expenses.
    pub supply_deduction_total: Decimal,
    /// Gross total minus supplies; the cash expected on hand.
    pub net_cash_balance: Decimal,
    /// Employee pool: gross total times [`EMPLOYEE_RATE`].
    pub employee_pool_share: Decimal,
    /// Owner: gross total times [`OWNER_RATE`], minus all supplies.
    pub owner_share: Decimal,
    /// Employee pool divided by `employee_count`.
    pub per_employee_share: Decimal,
    /// Configured employee count the pool was divided by.
    pub employee_count: EmployeeCount,
}

impl RevenueBreakdown {
    /// All-zero breakdown for an empty record set.
    #[must_use]
    pub fn zero(employee_count: EmployeeCount) -> Self {
        Self {
            gross_total: Decimal::ZERO,
            supply_deduction_total: Decimal::ZERO,
            net_cash_balance: Decimal::ZERO,
            employee_pool_share: Decimal::ZERO,
            owner_share: Decimal::ZERO,
            per_employee_share: Decimal::ZERO,
            employee_count,
        }
    }

    /// Returns a copy with every amount rounded to two decimals.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            gross_total: round_money(self.gross_total),
            supply_deduction_total: round_money(self.supply_deduction_total),
            net_cash_balance: round_money(self.net_cash_balance),
            employee_pool_share: round_money(self.employee_pool_share),
            owner_share: round_money(self.owner_share),
            per_employee_share: round_money(self.per_employee_share),
            employee_count: self.employee_count,
        }
    }
}
