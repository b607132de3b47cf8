//! Subcommand handlers.

use chrono::Local;
use rust_decimal::Decimal;
use tracing::warn;
use washledger_core::ledger::LedgerService;
use washledger_core::record::{NewRecord, RecordEdit};
use washledger_core::report::ReportService;
use washledger_core::storage::OpendalRecordStore;
use washledger_shared::types::money::{clamp_money, parse_decimal_prefix};
use washledger_shared::types::{EmployeeCount, coerce_money};
use washledger_shared::{AppConfig, AppError, AppResult};

use crate::cli::Command;
use crate::render;

/// Runs one subcommand against the configured store.
#[allow(clippy::too_many_lines)]
pub async fn execute(
    command: Command,
    service: &LedgerService<OpendalRecordStore>,
    config: &AppConfig,
) -> AppResult<()> {
    let symbol = config.display.currency_symbol.as_str();

    match command {
        Command::Add {
            vehicle_type,
            color,
            phone,
            employees,
            cost,
            supplies,
            photo,
        } => {
            require("type", &vehicle_type)?;
            require("color", &color)?;

            let mut input = NewRecord::new(
                vehicle_type,
                color,
                coerce_money(&cost),
                supplies.as_deref().map_or(Decimal::ZERO, coerce_money),
            )
            .with_employee_count(
                employees
                    .as_deref()
                    .map_or(EmployeeCount::ONE, EmployeeCount::parse_lenient),
            );
            if let Some(phone) = phone {
                input = input.with_phone(phone);
            }
            if let Some(photo) = photo {
                input = input.with_photo(photo);
            }

            let index = service.add_record(input, Local::now()).await?;
            println!("Added record #{index}");
            print_summary(service, symbol).await
        }
        Command::Edit {
            index,
            color,
            phone,
            employees,
            cost,
            supplies,
        } => {
            let ledger = service.load().await?;
            let mut edit = RecordEdit::from_record(ledger.get(index)?);
            if let Some(color) = color {
                edit.color = color;
            }
            if let Some(phone) = phone {
                edit.phone = Some(phone);
            }
            if let Some(raw) = employees {
                edit.employee_count = parse_record_count(&raw)?;
            }
            if let Some(raw) = cost {
                edit.cost = parse_amount("cost", &raw)?;
            }
            if let Some(raw) = supplies {
                edit.supply_expense = parse_amount("supplies", &raw)?;
            }

            service.edit_record(index, edit).await?;
            println!("Updated record #{index}");
            print_summary(service, symbol).await
        }
        Command::Delete { index } => {
            let removed = service.delete_record(index).await?;
            println!(
                "Deleted record #{index} ({} {})",
                removed.vehicle_type, removed.color
            );
            print_summary(service, symbol).await
        }
        Command::List(args) => {
            let ledger = service.load().await?;
            let view = ledger.view(&args.to_filter())?;
            println!("{}", render::records_table(&view, symbol));
            Ok(())
        }
        Command::Summary(args) => {
            let breakdown = service.breakdown(&args.to_filter()).await?;
            println!("{}", render::summary(&breakdown, symbol));
            Ok(())
        }
        Command::Employees { count } => {
            if let Some(raw) = count {
                match parse_count(&raw) {
                    Some(count) => service.set_employee_count(count).await?,
                    None => warn!(input = %raw, "ignoring invalid employee count"),
                }
            }
            let ledger = service.load().await?;
            println!("Employees: {}", ledger.employee_count());
            Ok(())
        }
        Command::Report { filter, stdout } => {
            let ledger = service.load().await?;
            let view = ledger.view(&filter.to_filter())?;
            let report =
                ReportService::build(&view, ledger.employee_count(), config.ledger.variant, Local::now())?;
            let text = report.render_text(symbol);

            if stdout {
                print!("{text}");
            } else {
                let path = service
                    .store()
                    .save_report(&report.file_name(), &text)
                    .await?;
                println!("Report saved to {path}");
            }
            Ok(())
        }
    }
}

async fn print_summary(
    service: &LedgerService<OpendalRecordStore>,
    symbol: &str,
) -> AppResult<()> {
    let ledger = service.load().await?;
    println!("{}", render::summary(&ledger.breakdown(), symbol));
    Ok(())
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Parses an edited amount; input with no leading number is rejected.
fn parse_amount(field: &str, raw: &str) -> AppResult<Decimal> {
    parse_decimal_prefix(raw)
        .map(clamp_money)
        .ok_or_else(|| AppError::Validation(format!("invalid {field}: {raw}")))
}

/// Per-record count on edit: garbage is rejected, non-positive clamps to 1.
fn parse_record_count(raw: &str) -> AppResult<EmployeeCount> {
    EmployeeCount::parse_clamped(raw)
        .ok_or_else(|| AppError::Validation(format!("invalid employee count: {raw}")))
}

/// Parses a positive employee count from the leading integer of `raw`.
fn parse_count(raw: &str) -> Option<EmployeeCount> {
    EmployeeCount::parse_positive(raw)
}
