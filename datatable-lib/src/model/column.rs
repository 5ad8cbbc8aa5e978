//! Column definitions

/// A table column definition.
///
/// `id` doubles as the data-field key handed to [`TableRow::value`] and as
/// the column identity used by sorting and edit sessions.
///
/// [`TableRow::value`]: super::TableRow::value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Field key and column identity.
    pub id: String,
    /// Header label.
    pub header: String,
    /// Whether header clicks toggle sorting.
    pub sortable: bool,
}

impl Column {
    /// Create a new sortable column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
        }
    }

    /// Disable sorting for this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}
