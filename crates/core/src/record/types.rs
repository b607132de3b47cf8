//! Record data types.
//!
//! Field names on the wire follow the established stored format (`costo`,
//! `insumos`, `numEmpleados`, ...), so existing data loads unchanged. Unknown keys are kept in [`TransactionRecord::extra`] and
//! written back on save.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use washledger_shared::types::EmployeeCount;
use washledger_shared::types::money::{clamp_money, two_decimal};

use super::serde_text;

/// A single service event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Creation time in epoch milliseconds.
    #[serde(
        default,
        deserialize_with = "serde_text::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
    /// Creation date, `D/M/YYYY`.
    #[serde(
        rename = "fecha",
        default,
        deserialize_with = "serde_text::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    /// Creation time of day. Baseline records hold the full date and time here.
    #[serde(
        rename = "hora",
        default,
        deserialize_with = "serde_text::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    /// Date and time as shown in listings.
    #[serde(
        rename = "fechaCompleta",
        default,
        deserialize_with = "serde_text::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recorded_at: Option<String>,
    /// Vehicle type, e.g. "Sedan".
    #[serde(rename = "tipo", default, deserialize_with = "serde_text::text")]
    pub vehicle_type: String,
    /// Vehicle color.
    #[serde(default, deserialize_with = "serde_text::text")]
    pub color: String,
    /// Customer phone.
    #[serde(
        rename = "telefono",
        default,
        deserialize_with = "serde_text::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    /// Workers credited for this job. Stored and shown, not used in the split.
    #[serde(rename = "numEmpleados", default)]
    pub employee_count: EmployeeCount,
    /// Amount charged to the customer.
    #[serde(rename = "costo", default, with = "two_decimal")]
    pub cost: Decimal,
    /// Cost of consumables for this job.
    #[serde(rename = "insumos", default, with = "two_decimal")]
    pub supply_expense: Decimal,
    /// Vehicle photo as a data URL.
    #[serde(
        rename = "foto",
        default,
        deserialize_with = "serde_text::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<String>,
    /// Keys this build does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionRecord {
    /// Builds a record from submitted input, stamped with `now`.
    #[must_use]
    pub fn create(input: NewRecord, now: DateTime<Local>) -> Self {
        let date = now.format("%-d/%-m/%Y").to_string();
        let time = now.format("%H:%M:%S").to_string();

        Self {
            timestamp: Some(now.timestamp_millis()),
            recorded_at: Some(format!("{date} {time}")),
            date: Some(date),
            time: Some(time),
            vehicle_type: input.vehicle_type.trim().to_string(),
            color: input.color.trim().to_string(),
            phone: clean_phone(input.phone.as_deref()),
            employee_count: input.employee_count,
            cost: clamp_money(input.cost),
            supply_expense: clamp_money(input.supply_expense),
            photo: input.photo.filter(|p| !p.is_empty()),
            extra: Map::new(),
        }
    }

    /// Replaces the editable fields in place.
    pub fn apply_edit(&mut self, edit: RecordEdit) {
        self.color = edit.color.trim().to_string();
        self.phone = clean_phone(edit.phone.as_deref());
        self.employee_count = edit.employee_count;
        self.cost = clamp_money(edit.cost);
        self.supply_expense = clamp_money(edit.supply_expense);
    }

    /// Calendar date of the job, if one can be resolved.
    ///
    /// Prefers the timestamp (local time), then the `D/M/YYYY` date field,
    /// then the leading date of the time field as written by baseline
    /// records.
    #[must_use]
    pub fn service_date(&self) -> Option<NaiveDate> {
        if let Some(date) = self
            .timestamp
            .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        {
            return Some(date.date_naive());
        }

        self.date
            .as_deref()
            .and_then(parse_day_month_year)
            .or_else(|| {
                self.time
                    .as_deref()
                    .and_then(|t| t.split_whitespace().next())
                    .and_then(parse_day_month_year)
            })
    }

    /// Date and time label for listings.
    #[must_use]
    pub fn display_when(&self) -> &str {
        self.recorded_at
            .as_deref()
            .or(self.time.as_deref())
            .unwrap_or("")
    }

    /// Date label for compact listings; falls back to [`Self::display_when`].
    #[must_use]
    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or_else(|| self.display_when())
    }
}

/// Input for creating a record.
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    /// Vehicle type.
    pub vehicle_type: String,
    /// Vehicle color.
    pub color: String,
    /// Customer phone.
    pub phone: Option<String>,
    /// Workers credited for the job.
    pub employee_count: EmployeeCount,
    /// Amount charged.
    pub cost: Decimal,
    /// Supplies used.
    pub supply_expense: Decimal,
    /// Vehicle photo as a data URL.
    pub photo: Option<String>,
}

impl NewRecord {
    /// Creates input with the required fields; the rest take defaults.
    #[must_use]
    pub fn new(
        vehicle_type: impl Into<String>,
        color: impl Into<String>,
        cost: Decimal,
        supply_expense: Decimal,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            color: color.into(),
            cost,
            supply_expense,
            ..Self::default()
        }
    }

    /// Sets the customer phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the workers credited for the job.
    #[must_use]
    pub const fn with_employee_count(mut self, count: EmployeeCount) -> Self {
        self.employee_count = count;
        self
    }

    /// Attaches a photo.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Replacement values for the editable fields of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEdit {
    /// New color.
    pub color: String,
    /// New phone; `None` or empty clears it.
    pub phone: Option<String>,
    /// New per-record employee count.
    pub employee_count: EmployeeCount,
    /// New amount charged.
    pub cost: Decimal,
    /// New supplies used.
    pub supply_expense: Decimal,
}

impl RecordEdit {
    /// Prefills an edit with the record's current values.
    #[must_use]
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            color: record.color.clone(),
            phone: record.phone.clone(),
            employee_count: record.employee_count,
            cost: record.cost,
            supply_expense: record.supply_expense,
        }
    }
}

fn clean_phone(phone: Option<&str>) -> Option<String> {
    phone
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

/// Parses `D/M/YYYY` (zero padding optional).
fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim().trim_end_matches(',');
    let mut parts = raw.split('/');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
