//! Edit session tracker.

use std::fmt;

use crate::error::EditError;
use crate::model::Value;

use super::{AbandonPolicy, CellEdit, EditSession};

type CommitHandler<R, C> = Box<dyn FnMut(&CellEdit<R, C>)>;

/// Tracks the single cell being edited and its draft text.
///
/// Committing never touches the row source; the edit is handed to the
/// commit handler, which decides whether to write it back. Without a
/// handler, commits are discarded.
///
/// # Example
///
/// ```ignore
/// let mut tracker = EditTracker::new()
///     .with_commit_handler(|edit: &CellEdit<u32, String>| println!("{:?}", edit));
/// tracker.begin_edit(Some(1), Some("age".to_string()), Some(&Value::Int(23)))?;
/// tracker.update_draft("24");
/// tracker.commit_edit();
/// ```
pub struct EditTracker<R, C> {
    session: EditSession<R, C>,
    policy: AbandonPolicy,
    on_commit: CommitHandler<R, C>,
}

impl<R, C> EditTracker<R, C>
where
    R: Clone + PartialEq + fmt::Debug,
    C: Clone + PartialEq + fmt::Debug,
{
    /// Create a tracker that discards commits.
    pub fn new() -> Self {
        Self {
            session: EditSession::Inactive,
            policy: AbandonPolicy::default(),
            on_commit: Box::new(|edit| {
                log::debug!(
                    "Discarding commit for {:?}/{:?}: {:?}",
                    edit.row,
                    edit.column,
                    edit.text
                );
            }),
        }
    }

    /// Set the commit handler.
    pub fn with_commit_handler(mut self, handler: impl FnMut(&CellEdit<R, C>) + 'static) -> Self {
        self.on_commit = Box::new(handler);
        self
    }

    /// Set the abandon policy.
    pub fn with_abandon_policy(mut self, policy: AbandonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn abandon_policy(&self) -> AbandonPolicy {
        self.policy
    }

    pub fn set_abandon_policy(&mut self, policy: AbandonPolicy) {
        self.policy = policy;
    }

    /// Current session.
    pub fn session(&self) -> &EditSession<R, C> {
        &self.session
    }

    /// In-progress text, if a cell is being edited.
    pub fn draft(&self) -> Option<&str> {
        self.session.draft()
    }

    /// Returns true if a cell is being edited.
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Returns true exactly when the given cell is being edited.
    pub fn is_editing(&self, row: &R, column: &C) -> bool {
        self.session.targets(row, column)
    }

    /// Start editing a cell.
    ///
    /// Any missing argument is rejected with a warning and leaves the
    /// tracker untouched. Otherwise any active session is replaced according
    /// to the abandon policy, and the draft starts as the cell's rendered
    /// value.
    pub fn begin_edit(
        &mut self,
        row: Option<R>,
        column: Option<C>,
        current: Option<&Value>,
    ) -> Result<(), EditError> {
        let (row, column, current) = match (row, column, current) {
            (None, _, _) => return Err(reject(EditError::MissingRow)),
            (_, None, _) => return Err(reject(EditError::MissingColumn)),
            (_, _, None) => return Err(reject(EditError::MissingValue)),
            (Some(row), Some(column), Some(current)) => (row, column, current),
        };

        if self.session.is_active() {
            match self.policy {
                AbandonPolicy::Discard => {
                    log::debug!("Abandoning draft: {:?}", self.session);
                }
                AbandonPolicy::AutoCommit => {
                    self.commit_edit();
                }
            }
        }

        log::debug!("Begin edit {:?}/{:?}", row, column);
        self.session = EditSession::Active {
            row,
            column,
            draft: current.to_string(),
        };
        Ok(())
    }

    /// Replace the draft text. Ignored when no cell is being edited.
    pub fn update_draft(&mut self, text: &str) -> bool {
        match &mut self.session {
            EditSession::Active { draft, .. } => {
                draft.clear();
                draft.push_str(text);
                true
            }
            EditSession::Inactive => {
                log::trace!("Draft update with no active edit");
                false
            }
        }
    }

    /// Hand the draft to the commit handler and end the session.
    ///
    /// Returns the committed edit, or `None` if no cell was being edited.
    pub fn commit_edit(&mut self) -> Option<CellEdit<R, C>> {
        let session = std::mem::replace(&mut self.session, EditSession::Inactive);
        let EditSession::Active { row, column, draft } = session else {
            return None;
        };
        let edit = CellEdit {
            row,
            column,
            text: draft,
        };
        log::debug!("Commit edit {:?}/{:?}", edit.row, edit.column);
        (self.on_commit)(&edit);
        Some(edit)
    }

    /// End the session without committing.
    pub fn cancel_edit(&mut self) -> bool {
        let was_active = self.session.is_active();
        if was_active {
            log::debug!("Edit cancelled");
        }
        self.session = EditSession::Inactive;
        was_active
    }
}

fn reject(error: EditError) -> EditError {
    log::warn!("{} (parameter: {})", error, error.parameter());
    error
}

impl<R, C> Default for EditTracker<R, C>
where
    R: Clone + PartialEq + fmt::Debug,
    C: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R: fmt::Debug, C: fmt::Debug> fmt::Debug for EditTracker<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditTracker")
            .field("session", &self.session)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
