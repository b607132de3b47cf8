//! Filtered view over the stored record list.

use crate::record::TransactionRecord;

/// Records selected for display or export, each paired with its stored index.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    entries: Vec<(usize, &'a TransactionRecord)>,
    filtered: bool,
}

impl<'a> FilteredView<'a> {
    /// View over every record.
    #[must_use]
    pub fn all(records: &'a [TransactionRecord]) -> Self {
        Self {
            entries: records.iter().enumerate().collect(),
            filtered: false,
        }
    }

    /// View over a chosen subset.
    #[must_use]
    pub fn filtered(entries: Vec<(usize, &'a TransactionRecord)>) -> Self {
        Self {
            entries,
            filtered: true,
        }
    }

    /// Whether a filter narrowed this view.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Number of records in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the view holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(stored index, record)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a TransactionRecord)> + '_ {
        self.entries.iter().copied()
    }

    /// Records only.
    pub fn records(&self) -> impl Iterator<Item = &'a TransactionRecord> + '_ {
        self.entries.iter().map(|(_, record)| *record)
    }

    /// Stored indices only.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(index, _)| *index)
    }
}
