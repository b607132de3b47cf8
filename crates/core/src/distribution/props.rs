//! Property-based tests for revenue distribution.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use washledger_shared::types::EmployeeCount;

use super::service::{RevenueDistributor, compute_breakdown};
use super::types::{EMPLOYEE_RATE, RevenueBreakdown};
use crate::record::TransactionRecord;

/// Strategy to generate non-negative amounts (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate up to 40 records.
fn records() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec((amount(), amount()), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(cost, supply_expense)| TransactionRecord {
                cost,
                supply_expense,
                ..TransactionRecord::default()
            })
            .collect()
    })
}

/// Strategy to generate an employee count (1 to 50).
fn employee_count() -> impl Strategy<Value = EmployeeCount> {
    (1u32..=50).prop_map(|n| EmployeeCount::new(n).unwrap_or(EmployeeCount::ONE))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Empty input yields the all-zero breakdown for any employee count.
    #[test]
    fn prop_empty_is_zero(count in employee_count()) {
        let result = compute_breakdown(&[], count);
        prop_assert_eq!(result, RevenueBreakdown::zero(count));
    }

    /// Employee pool plus owner share is exactly the net cash balance.
    #[test]
    fn prop_split_is_complete(records in records(), count in employee_count()) {
        let result = compute_breakdown(&records, count);
        prop_assert_eq!(
            result.employee_pool_share + result.owner_share,
            result.net_cash_balance
        );
    }

    /// Employee pool is 40% of gross regardless of supplies.
    #[test]
    fn prop_employee_pool_ignores_supplies(records in records(), count in employee_count()) {
        let result = compute_breakdown(&records, count);
        prop_assert_eq!(result.employee_pool_share, result.gross_total * EMPLOYEE_RATE);

        let without_supplies: Vec<TransactionRecord> = records
            .iter()
            .cloned()
            .map(|mut r| {
                r.supply_expense = Decimal::ZERO;
                r
            })
            .collect();
        let baseline = compute_breakdown(&without_supplies, count);
        prop_assert_eq!(result.employee_pool_share, baseline.employee_pool_share);
    }

    /// Per-employee share scaled back up gives the pool.
    #[test]
    fn prop_per_employee_scales_back(records in records(), count in employee_count()) {
        let result = compute_breakdown(&records, count);
        let rebuilt = result.per_employee_share * count.as_decimal();
        prop_assert!(
            (rebuilt - result.employee_pool_share).abs() < dec!(0.000001),
            "rebuilt {} vs pool {}",
            rebuilt,
            result.employee_pool_share
        );
    }

    /// Same inputs, same output.
    #[test]
    fn prop_is_deterministic(records in records(), count in employee_count()) {
        let first = compute_breakdown(&records, count);
        let second = compute_breakdown(&records, count);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.gross_total.serialize(), second.gross_total.serialize());
        prop_assert_eq!(
            first.per_employee_share.serialize(),
            second.per_employee_share.serialize()
        );
    }

    /// Splitting the input and summing the gross parts gives the whole.
    #[test]
    fn prop_gross_is_additive(records in records(), split in 0usize..40) {
        let split = split.min(records.len());
        let (head, tail) = records.split_at(split);
        let whole = RevenueDistributor::compute(&records, EmployeeCount::ONE);
        let left = RevenueDistributor::compute(head, EmployeeCount::ONE);
        let right = RevenueDistributor::compute(tail, EmployeeCount::ONE);
        prop_assert_eq!(whole.gross_total, left.gross_total + right.gross_total);
        prop_assert_eq!(
            whole.supply_deduction_total,
            left.supply_deduction_total + right.supply_deduction_total
        );
    }
}
