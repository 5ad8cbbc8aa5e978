//! Row trait

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::FieldError;

use super::Value;

/// Trait for records that can be displayed in a table.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn value(&self, column_id: &str) -> Value {
///         match column_id {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + 'static {
    /// Stable row identity. Only ever compared for equality.
    type Key: Clone + Eq + Hash + Debug + Display + 'static;

    /// Return the identity of this row.
    fn key(&self) -> Self::Key;

    /// Cell accessor for the given column.
    fn value(&self, column_id: &str) -> Value;

    /// Write text back into a column.
    ///
    /// Only called when a host commit handler decides to apply an edit.
    fn set_value(&mut self, column_id: &str, _text: &str) -> Result<(), FieldError> {
        Err(FieldError::read_only(column_id))
    }
}
