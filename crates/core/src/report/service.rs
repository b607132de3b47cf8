//! Report generation service.

use chrono::{DateTime, Local};
use tracing::debug;
use washledger_shared::LedgerVariant;
use washledger_shared::types::EmployeeCount;

use super::error::ReportError;
use super::types::{COLOR_WIDTH, PHONE_WIDTH, ReportRow, SummaryReport, TYPE_WIDTH, truncate};
use crate::distribution::RevenueDistributor;
use crate::filter::FilteredView;
use crate::record::TransactionRecord;

/// Service for building exported reports.
pub struct ReportService;

impl ReportService {
    /// Builds the report for the records in `view`.
    ///
    /// Headline figures come from the same distributor as the on-screen
    /// summary, over the same view.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoRecords` if the view is empty.
    pub fn build(
        view: &FilteredView<'_>,
        employee_count: EmployeeCount,
        variant: LedgerVariant,
        generated_at: DateTime<Local>,
    ) -> Result<SummaryReport, ReportError> {
        if view.is_empty() {
            return Err(ReportError::NoRecords);
        }

        let breakdown = RevenueDistributor::compute(view.records(), employee_count).rounded();
        let rows: Vec<ReportRow> = view
            .iter()
            .map(|(index, record)| Self::row(index, record, variant))
            .collect();

        debug!(rows = rows.len(), filtered = view.is_filtered(), "report built");

        Ok(SummaryReport {
            title: Self::title(variant, view.is_filtered()),
            variant,
            generated_at,
            breakdown,
            rows,
        })
    }

    fn title(variant: LedgerVariant, filtered: bool) -> String {
        let base = match variant {
            LedgerVariant::Baseline => "Vehicle Log Report",
            LedgerVariant::Advanced => "Advanced Report",
        };
        if filtered {
            format!("{base} (FILTERED)")
        } else {
            base.to_string()
        }
    }

    fn row(index: usize, record: &TransactionRecord, variant: LedgerVariant) -> ReportRow {
        let when = match variant {
            LedgerVariant::Baseline => record.display_when(),
            LedgerVariant::Advanced => record.display_date(),
        };

        ReportRow {
            index,
            when: when.to_string(),
            vehicle_type: truncate(&record.vehicle_type, TYPE_WIDTH),
            color: truncate(&record.color, COLOR_WIDTH),
            phone: record
                .phone
                .as_deref()
                .map_or_else(|| "N/A".to_string(), |p| truncate(p, PHONE_WIDTH)),
            employees: record.employee_count.get(),
            cost: record.cost,
            supply_expense: record.supply_expense,
        }
    }
}
