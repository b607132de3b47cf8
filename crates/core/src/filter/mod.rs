//! Record filtering for listings, summaries, and reports.
//!
//! A filter is an explicit value handed to whoever needs a subset. The
//! resulting [`FilteredView`] keeps each record's position in the stored
//! list, so edits and deletions made from a filtered listing hit the right
//! record.

pub mod error;
pub mod view;

use chrono::NaiveDate;

use crate::record::TransactionRecord;

pub use error::FilterError;
pub use view::FilteredView;

/// Criteria selecting a subset of records. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Earliest service date, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest service date, inclusive.
    pub to: Option<NaiveDate>,
    /// Vehicle type, compared case-insensitively.
    pub vehicle_type: Option<String>,
    /// Case-insensitive fragment of the color or phone.
    pub text: Option<String>,
}

impl RecordFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to service dates from `from` onwards.
    #[must_use]
    pub const fn from_date(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Restricts to service dates up to `to`.
    #[must_use]
    pub const fn to_date(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Restricts to one vehicle type.
    #[must_use]
    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    /// Restricts to records whose color or phone contains `text`.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.vehicle_type.as_deref().is_none_or(|v| v.trim().is_empty())
            && self.text.as_deref().is_none_or(|t| t.trim().is_empty())
    }

    /// Checks the date bounds.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDateRange` if `from` is after `to`.
    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.from, self.to) {
            (Some(start), Some(end)) if start > end => {
                Err(FilterError::InvalidDateRange { start, end })
            }
            _ => Ok(()),
        }
    }

    /// Returns true if `record` satisfies every criterion.
    ///
    /// A record without a resolvable date fails any date bound.
    #[must_use]
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = record.service_date() else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) || self.to.is_some_and(|to| date > to) {
                return false;
            }
        }

        if let Some(wanted) = self.vehicle_type.as_deref().map(str::trim)
            && !wanted.is_empty()
            && !record.vehicle_type.trim().eq_ignore_ascii_case(wanted)
        {
            return false;
        }

        if let Some(needle) = self.text.as_deref().map(str::trim)
            && !needle.is_empty()
        {
            let needle = needle.to_lowercase();
            let in_color = record.color.to_lowercase().contains(&needle);
            let in_phone = record
                .phone
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(&needle));
            if !in_color && !in_phone {
                return false;
            }
        }

        true
    }

    /// Selects the matching records, keeping their stored positions.
    ///
    /// An empty filter yields an unfiltered view of every record.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDateRange` if `from` is after `to`.
    pub fn apply<'a>(
        &self,
        records: &'a [TransactionRecord],
    ) -> Result<FilteredView<'a>, FilterError> {
        self.validate()?;

        if self.is_empty() {
            return Ok(FilteredView::all(records));
        }

        Ok(FilteredView::filtered(
            records
                .iter()
                .enumerate()
                .filter(|(_, record)| self.matches(record))
                .collect(),
        ))
    }
}
