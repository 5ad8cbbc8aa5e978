//! FieldError for row cell writes

/// Error type for writing a cell value back into a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The row has no column with this id.
    #[error("Column '{column}' not found in row")]
    Missing { column: String },

    /// The column cannot be written (row identity, computed values).
    #[error("Column '{column}' is read-only")]
    ReadOnly { column: String },

    /// The text could not be converted to the column's type.
    #[error("Column '{column}' expects {expected}, got '{text}'")]
    Parse {
        column: String,
        expected: &'static str,
        text: String,
    },

    /// No row with the given key is loaded.
    #[error("Row '{key}' not found")]
    UnknownRow { key: String },
}

impl FieldError {
    /// Creates a new missing column error.
    pub fn missing(column: impl Into<String>) -> Self {
        Self::Missing {
            column: column.into(),
        }
    }

    /// Creates a new read-only column error.
    pub fn read_only(column: impl Into<String>) -> Self {
        Self::ReadOnly {
            column: column.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse(column: impl Into<String>, expected: &'static str, text: impl Into<String>) -> Self {
        Self::Parse {
            column: column.into(),
            expected,
            text: text.into(),
        }
    }

    /// Creates a new unknown row error.
    pub fn unknown_row(key: impl ToString) -> Self {
        Self::UnknownRow {
            key: key.to_string(),
        }
    }
}
