//! Report data types.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use washledger_shared::LedgerVariant;
use washledger_shared::types::{format_money, to_money_string};

use crate::distribution::RevenueBreakdown;

/// Rows printed per page; the column header repeats on each page.
pub const ROWS_PER_PAGE: usize = 38;

/// Truncation widths for text columns.
pub(crate) const TYPE_WIDTH: usize = 8;
pub(crate) const COLOR_WIDTH: usize = 10;
pub(crate) const PHONE_WIDTH: usize = 10;

const WHEN_WIDTH: usize = 19;
const MONEY_WIDTH: usize = 12;

/// One exported record line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Stored index of the record.
    pub index: usize,
    /// Date label (arrival time for the baseline ledger, service date otherwise).
    pub when: String,
    /// Vehicle type, truncated.
    pub vehicle_type: String,
    /// Color, truncated.
    pub color: String,
    /// Phone, truncated; `N/A` when absent.
    pub phone: String,
    /// Per-record employee count as entered.
    pub employees: u32,
    /// Service cost.
    pub cost: Decimal,
    /// Supply expense.
    pub supply_expense: Decimal,
}

/// Exported summary of a record view.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Report title.
    pub title: String,
    /// Which ledger the rows came from.
    pub variant: LedgerVariant,
    /// Generation time.
    pub generated_at: DateTime<Local>,
    /// Headline figures, rounded to two decimals.
    pub breakdown: RevenueBreakdown,
    /// Record lines in stored order.
    pub rows: Vec<ReportRow>,
}

impl SummaryReport {
    /// Export file name, e.g. `Reporte_Avanzado_130.00_2026-10-17.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let prefix = match self.variant {
            LedgerVariant::Baseline => "Reporte_Caja",
            LedgerVariant::Advanced => "Reporte_Avanzado",
        };
        format!(
            "{prefix}_{}_{}.txt",
            to_money_string(self.breakdown.net_cash_balance),
            self.generated_at.format("%Y-%m-%d")
        )
    }

    /// Number of printed pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(ROWS_PER_PAGE).max(1)
    }

    /// Rows split into pages.
    pub fn pages(&self) -> impl Iterator<Item = &[ReportRow]> {
        self.rows.chunks(ROWS_PER_PAGE)
    }

    /// Headline lines in print order.
    #[must_use]
    pub fn headline_lines(&self, symbol: &str) -> Vec<String> {
        let b = &self.breakdown;
        vec![
            format!("GROSS TOTAL: {}", format_money(b.gross_total, symbol)),
            format!("NET CASH BALANCE: {}", format_money(b.net_cash_balance, symbol)),
            format!("EMPLOYEE POOL (40%): {}", format_money(b.employee_pool_share, symbol)),
            format!(
                "OWNER SHARE (60% - SUPPLIES): {}",
                format_money(b.owner_share, symbol)
            ),
            format!(
                "(Supply deduction: {})",
                format_money(b.supply_deduction_total, symbol)
            ),
            format!(
                "PER EMPLOYEE ({}): {}",
                b.employee_count,
                format_money(b.per_employee_share, symbol)
            ),
        ]
    }

    /// Renders the printable document.
    #[must_use]
    pub fn render_text(&self, symbol: &str) -> String {
        let mut lines = vec![
            self.title.clone(),
            format!("Generated: {}", self.generated_at.format("%-d/%-m/%Y %H:%M:%S")),
            String::new(),
        ];
        lines.extend(self.headline_lines(symbol));

        let pages = self.page_count();
        for (number, page) in self.pages().enumerate() {
            lines.push(String::new());
            lines.push(format!("--- Page {} of {pages} ---", number + 1));
            lines.push(header_line());
            lines.extend(page.iter().map(|row| row_line(row, symbol)));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn header_line() -> String {
    format!(
        "{:<WHEN_WIDTH$}  {:<TYPE_WIDTH$}  {:<COLOR_WIDTH$}  {:<PHONE_WIDTH$}  {:>3}  {:>MONEY_WIDTH$}  {:>MONEY_WIDTH$}",
        "Date", "Type", "Color", "Phone", "Emp", "Cost", "Supplies"
    )
}

fn row_line(row: &ReportRow, symbol: &str) -> String {
    format!(
        "{:<WHEN_WIDTH$}  {:<TYPE_WIDTH$}  {:<COLOR_WIDTH$}  {:<PHONE_WIDTH$}  {:>3}  {:>MONEY_WIDTH$}  {:>MONEY_WIDTH$}",
        row.when,
        row.vehicle_type,
        row.color,
        row.phone,
        row.employees,
        format_money(row.cost, symbol),
        format_money(row.supply_expense, symbol),
    )
}

/// First `width` characters of `text`.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
