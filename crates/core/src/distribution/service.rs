//! Revenue distribution service.

use rust_decimal::Decimal;
use washledger_shared::types::EmployeeCount;

use super::types::{EMPLOYEE_RATE, OWNER_RATE, RevenueBreakdown};
use crate::record::TransactionRecord;

/// Service computing the revenue split.
pub struct RevenueDistributor;

impl RevenueDistributor {
    /// Computes the breakdown for whatever records the caller passes.
    ///
    /// The sequence may be the whole ledger or a filtered subset; it is
    /// treated as authoritative. The per-record employee count is carried on
    /// each record but does not take part in the split; only the configured
    /// `employee_count` divides the pool.
    #[must_use]
    pub fn compute<'a, I>(records: I, employee_count: EmployeeCount) -> RevenueBreakdown
    where
        I: IntoIterator<Item = &'a TransactionRecord>,
    {
        Self::compute_from_amounts(
            records
                .into_iter()
                .map(|record| (record.cost, record.supply_expense)),
            employee_count,
        )
    }

    /// Computes the breakdown from `(cost, supply_expense)` pairs.
    ///
    /// 1. gross = Σ cost
    /// 2. supplies = Σ supply_expense
    /// 3. net cash = gross - supplies
    /// 4. employee pool = gross × 0.40
    /// 5. owner = gross × 0.60 - supplies
    /// 6. per employee = employee pool ÷ employee_count
    ///
    /// Sums saturate at the `Decimal` bounds instead of overflowing.
    #[must_use]
    pub fn compute_from_amounts<I>(amounts: I, employee_count: EmployeeCount) -> RevenueBreakdown
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        let (gross_total, supply_deduction_total) = amounts.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(gross, supplies), (cost, supply)| {
                (gross.saturating_add(cost), supplies.saturating_add(supply))
            },
        );

        let net_cash_balance = gross_total.saturating_sub(supply_deduction_total);
        let employee_pool_share = gross_total.saturating_mul(EMPLOYEE_RATE);
        let owner_share = gross_total
            .saturating_mul(OWNER_RATE)
            .saturating_sub(supply_deduction_total);
        let per_employee_share = employee_pool_share / employee_count.as_decimal();

        RevenueBreakdown {
            gross_total,
            supply_deduction_total,
            net_cash_balance,
            employee_pool_share,
            owner_share,
            per_employee_share,
            employee_count,
        }
    }
}

/// Computes the breakdown for `records` split across `employee_count`.
///
/// Shorthand for [`RevenueDistributor::compute`].
#[must_use]
pub fn compute_breakdown(
    records: &[TransactionRecord],
    employee_count: EmployeeCount,
) -> RevenueBreakdown {
    RevenueDistributor::compute(records, employee_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TransactionRecord;
    use rust_decimal_macros::dec;

    fn record(cost: Decimal, supply: Decimal) -> TransactionRecord {
        TransactionRecord {
            cost,
            supply_expense: supply,
            ..TransactionRecord::default()
        }
    }

    fn employees(n: u32) -> EmployeeCount {
        EmployeeCount::new(n).expect("non-zero")
    }

    #[test]
    fn test_empty_records_yield_zero() {
        let result = compute_breakdown(&[], employees(3));
        assert_eq!(result, RevenueBreakdown::zero(employees(3)));
    }

    #[test]
    fn test_two_records_two_employees() {
        let records = vec![record(dec!(100), dec!(20)), record(dec!(50), dec!(0))];

        let result = compute_breakdown(&records, employees(2));

        assert_eq!(result.gross_total, dec!(150.00));
        assert_eq!(result.supply_deduction_total, dec!(20.00));
        assert_eq!(result.net_cash_balance, dec!(130.00));
        assert_eq!(result.employee_pool_share, dec!(60.00));
        assert_eq!(result.owner_share, dec!(70.00));
        assert_eq!(result.per_employee_share, dec!(30.00));
    }

    #[test]
    fn test_single_record_default_employees() {
        let records = vec![record(dec!(80), dec!(10))];

        let result = compute_breakdown(&records, EmployeeCount::default());

        assert_eq!(result.gross_total, dec!(80.00));
        assert_eq!(result.owner_share, dec!(38.00));
        assert_eq!(result.employee_pool_share, dec!(32.00));
        assert_eq!(result.per_employee_share, dec!(32.00));
        assert_eq!(result.net_cash_balance, dec!(70.00));
    }

    #[test]
    fn test_supplies_never_touch_employee_pool() {
        let cheap = compute_breakdown(&[record(dec!(200), dec!(0))], employees(1));
        let costly = compute_breakdown(&[record(dec!(200), dec!(150))], employees(1));

        assert_eq!(cheap.employee_pool_share, costly.employee_pool_share);
        assert_eq!(costly.owner_share, dec!(-30));
        assert_eq!(costly.net_cash_balance, dec!(50));
    }

    #[test]
    fn test_per_record_employee_count_is_ignored() {
        let mut crewed = record(dec!(100), dec!(0));
        crewed.employee_count = employees(5);

        let result = compute_breakdown(&[crewed], employees(2));

        assert_eq!(result.per_employee_share, dec!(20));
        assert_eq!(result.employee_count, employees(2));
    }

    #[test]
    fn test_uneven_division_keeps_precision() {
        let result = compute_breakdown(&[record(dec!(100), dec!(0))], employees(3));

        assert!(result.per_employee_share > dec!(13.33));
        assert!(result.per_employee_share < dec!(13.34));
        assert_eq!(result.rounded().per_employee_share, dec!(13.33));
    }

    #[test]
    fn test_compute_from_amounts_matches_records() {
        let records = vec![record(dec!(35.50), dec!(4.25)), record(dec!(60), dec!(7.75))];
        let from_records = RevenueDistributor::compute(&records, employees(4));
        let from_amounts = RevenueDistributor::compute_from_amounts(
            [(dec!(35.50), dec!(4.25)), (dec!(60), dec!(7.75))],
            employees(4),
        );
        assert_eq!(from_records, from_amounts);
    }

    #[test]
    fn test_huge_coerced_amounts_stay_in_range() {
        use washledger_shared::types::coerce_money;
        use washledger_shared::types::money::MAX_AMOUNT;

        let huge = coerce_money("5e28");
        let records = vec![record(huge, huge), record(huge, dec!(0)), record(huge, huge)];

        let result = compute_breakdown(&records, employees(3));

        assert_eq!(result.gross_total, MAX_AMOUNT * dec!(3));
        assert_eq!(result.supply_deduction_total, MAX_AMOUNT * dec!(2));
        assert_eq!(result.net_cash_balance, MAX_AMOUNT);
        assert_eq!(result.employee_pool_share, MAX_AMOUNT * dec!(1.2));
        assert_eq!(result.per_employee_share, MAX_AMOUNT * dec!(0.4));
    }

    #[test]
    fn test_near_max_amounts_saturate() {
        let records = vec![
            record(Decimal::MAX, Decimal::MAX),
            record(Decimal::MAX, Decimal::MAX),
            record(Decimal::MAX, dec!(1)),
        ];

        let result = compute_breakdown(&records, employees(2));

        assert_eq!(result.gross_total, Decimal::MAX);
        assert_eq!(result.supply_deduction_total, Decimal::MAX);
        assert_eq!(result.net_cash_balance, Decimal::ZERO);
        assert!(result.owner_share < Decimal::ZERO);
        assert!(result.per_employee_share > Decimal::ZERO);
        assert_eq!(result.rounded().gross_total, Decimal::MAX);
    }
}
