//! Edit session state.

use serde::{Deserialize, Serialize};

/// The cell currently being edited, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession<R, C> {
    /// No cell is being edited.
    Inactive,
    /// Exactly one cell is being edited.
    Active {
        row: R,
        column: C,
        /// In-progress text.
        draft: String,
    },
}

impl<R, C> Default for EditSession<R, C> {
    fn default() -> Self {
        EditSession::Inactive
    }
}

impl<R: PartialEq, C: PartialEq> EditSession<R, C> {
    /// Returns true if a cell is being edited.
    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Active { .. })
    }

    /// Returns true if this session targets the given cell.
    pub fn targets(&self, row: &R, column: &C) -> bool {
        match self {
            EditSession::Active {
                row: r, column: c, ..
            } => r == row && c == column,
            EditSession::Inactive => false,
        }
    }

    /// In-progress text, if active.
    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSession::Active { draft, .. } => Some(draft),
            EditSession::Inactive => None,
        }
    }
}

/// A committed edit, handed to the commit handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit<R, C> {
    pub row: R,
    pub column: C,
    pub text: String,
}

/// What happens to an in-progress draft when another cell is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonPolicy {
    /// Drop the draft silently. It never reaches the commit handler.
    #[default]
    Discard,
    /// Commit the draft before starting the new session.
    AutoCommit,
}
