//! Tabular state engine.
//!
//! [`TableEngine`] is the contract the table views render against: header
//! groups with sort state, the visible page of rows, and pagination
//! controls. [`ClientEngine`] is the in-memory implementation; any other
//! implementation satisfying the trait can be swapped in.

mod client;
mod sort;

pub use client::ClientEngine;
pub use sort::*;

use crate::error::FieldError;
use crate::model::{Column, TableRow};

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Column identity.
    pub column_id: String,
    /// Display label.
    pub label: String,
    /// Current sort direction, `None` when unsorted.
    pub sort: Option<SortDirection>,
    /// Position in a multi-column sort, `None` when unsorted.
    pub sort_index: Option<usize>,
    /// Whether clicking this header toggles sorting.
    pub sortable: bool,
}

/// A row of headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: String,
    pub headers: Vec<Header>,
}

/// Sort, filter and pagination state over a fixed set of rows.
///
/// Filtering runs before sorting, sorting before pagination. Changing the
/// filter, the sort specification or the page size returns to the first
/// page.
pub trait TableEngine {
    /// Row type served by this engine.
    type Row: TableRow;

    // -------------------------------------------------------------------------
    // Columns and sorting
    // -------------------------------------------------------------------------

    /// Column definitions in display order.
    fn columns(&self) -> &[Column];

    /// Current sort specification, highest priority first.
    fn sorting(&self) -> &[ColumnSort];

    /// Replace the sort specification.
    fn set_sorting(&mut self, sorting: Vec<ColumnSort>);

    /// Header rows with their sort state.
    fn header_groups(&self) -> Vec<HeaderGroup> {
        let sorting = self.sorting();
        let headers = self
            .columns()
            .iter()
            .map(|column| {
                let position = sorting.iter().position(|s| s.column_id == column.id);
                Header {
                    column_id: column.id.clone(),
                    label: column.header.clone(),
                    sort: position.map(|i| sorting[i].direction),
                    sort_index: position,
                    sortable: column.sortable,
                }
            })
            .collect();
        vec![HeaderGroup {
            id: "0".to_string(),
            headers,
        }]
    }

    /// Current sort direction of a column.
    fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        sort_direction_of(self.sorting(), column_id)
    }

    /// Cycle a column through none, ascending, descending, none.
    ///
    /// Any other sorted column is dropped. Returns the column's new
    /// direction.
    fn toggle_sort(&mut self, column_id: &str) -> Option<SortDirection> {
        if !self.is_sortable(column_id) {
            log::debug!("Ignoring sort toggle on unsortable column {}", column_id);
            return self.sort_direction(column_id);
        }
        let (sorting, direction) = toggled(self.sorting(), column_id, false);
        self.set_sorting(sorting);
        direction
    }

    /// Like [`toggle_sort`](Self::toggle_sort) but keeps other sorted
    /// columns, appending this one at the lowest priority.
    fn toggle_sort_multi(&mut self, column_id: &str) -> Option<SortDirection> {
        if !self.is_sortable(column_id) {
            log::debug!("Ignoring sort toggle on unsortable column {}", column_id);
            return self.sort_direction(column_id);
        }
        let (sorting, direction) = toggled(self.sorting(), column_id, true);
        self.set_sorting(sorting);
        direction
    }

    /// Whether a column exists and accepts sort toggles.
    fn is_sortable(&self, column_id: &str) -> bool {
        self.columns()
            .iter()
            .any(|c| c.id == column_id && c.sortable)
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Current global filter text.
    fn global_filter(&self) -> &str;

    /// Replace the global filter text.
    fn set_global_filter(&mut self, filter: &str);

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Rows on the current page, filtered and sorted.
    fn rows(&self) -> Vec<&Self::Row>;

    /// Number of rows passing the filter, across all pages.
    fn filtered_row_count(&self) -> usize;

    /// Write text into a cell and recompute.
    ///
    /// Used by hosts that apply committed edits back into the row source.
    fn update_cell(
        &mut self,
        key: &<Self::Row as TableRow>::Key,
        column_id: &str,
        text: &str,
    ) -> Result<(), FieldError>;

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Zero-based index of the current page.
    fn page_index(&self) -> usize;

    /// Rows per page.
    fn page_size(&self) -> usize;

    /// Set rows per page (at least one) and return to the first page.
    fn set_page_size(&mut self, size: usize);

    /// Jump to a page, clamped to the available pages.
    fn set_page_index(&mut self, index: usize);

    /// Number of pages. An empty result still has one (empty) page.
    fn page_count(&self) -> usize {
        self.filtered_row_count().div_ceil(self.page_size().max(1)).max(1)
    }

    fn can_previous_page(&self) -> bool {
        self.page_index() > 0
    }

    fn can_next_page(&self) -> bool {
        self.page_index() + 1 < self.page_count()
    }

    fn first_page(&mut self) {
        self.set_page_index(0);
    }

    fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.set_page_index(self.page_index() - 1);
        }
    }

    fn next_page(&mut self) {
        if self.can_next_page() {
            self.set_page_index(self.page_index() + 1);
        }
    }

    fn last_page(&mut self) {
        self.set_page_index(self.page_count() - 1);
    }
}
