//! Section assembly: the renderer-facing shape of one fetch.

use api_types::transaction::TransactionRecord;

use crate::{grouping::group_records, partition::partition_by_status, row_group::RowGroup};

/// The sectioned list model built from one fetch batch.
///
/// Pending-derived groups come first, then Completed-derived groups; a
/// partition that yields no groups contributes no section, so the
/// section count is 0, 1, or 2 depending on the data. The model is
/// rebuilt wholesale from each new record set and never mutated in
/// place.
///
/// The renderer queries counts, titles, and rows through this type only
/// and never sees the raw records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionsList {
    sections: Vec<Vec<RowGroup>>,
}

impl TransactionsList {
    /// Partitions, groups, sorts, and summarizes one fetch batch.
    #[must_use]
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        let (pending, completed) = partition_by_status(records);

        let sections = [pending, completed]
            .into_iter()
            .map(|partition| {
                group_records(partition)
                    .into_iter()
                    .map(|(_, members)| RowGroup::new(members))
                    .collect::<Vec<_>>()
            })
            .filter(|rows| !rows.is_empty())
            .collect();

        Self { sections }
    }

    /// Number of renderable sections: 0, 1, or 2.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in a section, `None` out of range.
    #[must_use]
    pub fn row_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Vec::len)
    }

    /// Section header text, from the first row group's title.
    #[must_use]
    pub fn section_title(&self, section: usize) -> Option<&'static str> {
        self.sections
            .get(section)?
            .first()
            .and_then(RowGroup::title)
    }

    /// The display summary at an index pair, `None` out of range.
    #[must_use]
    pub fn row(&self, section: usize, row: usize) -> Option<&RowGroup> {
        self.sections.get(section)?.get(row)
    }
}
