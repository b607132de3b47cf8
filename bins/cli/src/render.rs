//! Terminal output.

use washledger_core::distribution::RevenueBreakdown;
use washledger_core::filter::FilteredView;
use washledger_shared::types::format_money;

/// Record table with stored indices.
pub fn records_table(view: &FilteredView<'_>, symbol: &str) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:<19}  {:<12}  {:<12}  {:<14}  {:>3}  {:>12}  {:>12}  {}",
        "#", "When", "Type", "Color", "Phone", "Emp", "Cost", "Supplies", "Photo"
    )];

    lines.extend(view.iter().map(|(index, record)| {
        format!(
            "{index:>4}  {:<19}  {:<12}  {:<12}  {:<14}  {:>3}  {:>12}  {:>12}  {}",
            record.display_when(),
            record.vehicle_type,
            record.color,
            record.phone.as_deref().unwrap_or("N/A"),
            record.employee_count.get(),
            format_money(record.cost, symbol),
            format_money(record.supply_expense, symbol),
            if record.photo.is_some() { "yes" } else { "" },
        )
    }));

    let noun = if view.is_filtered() { "filtered records" } else { "records" };
    lines.push(format!("{} {noun}", view.len()));
    lines.join("\n")
}

/// The six summary figures, two decimals with the currency prefix.
pub fn summary(breakdown: &RevenueBreakdown, symbol: &str) -> String {
    let b = breakdown.rounded();
    [
        format!("Gross total:          {}", format_money(b.gross_total, symbol)),
        format!("Supply deduction:     {}", format_money(b.supply_deduction_total, symbol)),
        format!("Net cash balance:     {}", format_money(b.net_cash_balance, symbol)),
        format!("Employee pool (40%):  {}", format_money(b.employee_pool_share, symbol)),
        format!("Owner share (60%):    {}", format_money(b.owner_share, symbol)),
        format!(
            "Per employee ({}):     {}",
            b.employee_count,
            format_money(b.per_employee_share, symbol)
        ),
    ]
    .join("\n")
}
