//! In-memory table engine.

use crate::error::FieldError;
use crate::filter::GlobalFilter;
use crate::model::{Column, TableRow};

use super::sort::compare_rows;
use super::{ColumnSort, TableEngine};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Engine holding every row in memory.
///
/// The row set is fixed at construction. Every state change reruns the
/// filter, sort and clamp steps, which keeps [`TableEngine::rows`] a cheap
/// slice of cached indices.
#[derive(Debug, Clone)]
pub struct ClientEngine<T: TableRow> {
    /// Column definitions.
    columns: Vec<Column>,
    /// All rows, in source order.
    data: Vec<T>,
    /// Current sort specification.
    sorting: Vec<ColumnSort>,
    /// Global filter text.
    global_filter: String,
    /// Zero-based current page.
    page_index: usize,
    /// Rows per page.
    page_size: usize,
    /// Indices into `data` that pass the filter, in sorted order.
    visible: Vec<usize>,
}

impl<T: TableRow> ClientEngine<T> {
    /// Create an engine over a fixed row set.
    pub fn new(columns: Vec<Column>, data: Vec<T>) -> Self {
        let mut engine = Self {
            columns,
            data,
            sorting: Vec::new(),
            global_filter: String::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            visible: Vec::new(),
        };
        engine.recompute();
        engine
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.set_page_size(size);
        self
    }

    /// All rows in source order, ignoring filter and pagination.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Filtered and sorted rows across all pages.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().map(|&i| &self.data[i])
    }

    fn recompute(&mut self) {
        let mut filter = GlobalFilter::new(&self.global_filter);
        let mut visible: Vec<usize> = (0..self.data.len())
            .filter(|&i| filter.matches_row(&self.data[i], &self.columns))
            .collect();

        if !self.sorting.is_empty() {
            // Stable, so equal keys keep their source order.
            visible.sort_by(|&a, &b| compare_rows(&self.data[a], &self.data[b], &self.sorting));
        }

        log::trace!(
            "Recomputed rows: {} of {} visible, sorting {:?}",
            visible.len(),
            self.data.len(),
            self.sorting
        );
        self.visible = visible;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

impl<T: TableRow> TableEngine for ClientEngine<T> {
    type Row = T;

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn sorting(&self) -> &[ColumnSort] {
        &self.sorting
    }

    fn set_sorting(&mut self, sorting: Vec<ColumnSort>) {
        log::debug!("Sorting changed: {:?}", sorting);
        self.sorting = sorting;
        self.page_index = 0;
        self.recompute();
    }

    fn global_filter(&self) -> &str {
        &self.global_filter
    }

    fn set_global_filter(&mut self, filter: &str) {
        if self.global_filter == filter {
            return;
        }
        self.global_filter = filter.to_string();
        self.page_index = 0;
        self.recompute();
    }

    fn rows(&self) -> Vec<&T> {
        let start = (self.page_index * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        self.visible[start..end]
            .iter()
            .map(|&i| &self.data[i])
            .collect()
    }

    fn filtered_row_count(&self) -> usize {
        self.visible.len()
    }

    fn update_cell(&mut self, key: &T::Key, column_id: &str, text: &str) -> Result<(), FieldError> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return Err(FieldError::missing(column_id));
        }
        let row = self
            .data
            .iter_mut()
            .find(|row| &row.key() == key)
            .ok_or_else(|| FieldError::unknown_row(key))?;
        row.set_value(column_id, text)?;
        // Keep the current page; the edited row may move or drop out.
        let page = self.page_index;
        self.recompute();
        self.set_page_index(page);
        Ok(())
    }

    fn page_index(&self) -> usize {
        self.page_index
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
        self.clamp_page();
    }

    fn set_page_index(&mut self, index: usize) {
        self.page_index = index;
        self.clamp_page();
    }
}
