//! Edit session errors

/// Rejected `begin_edit` call.
///
/// These are diagnostics only: the tracker is left untouched and nothing
/// is raised to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("cannot begin edit: row identity is missing")]
    MissingRow,
    #[error("cannot begin edit: column identity is missing")]
    MissingColumn,
    #[error("cannot begin edit: current cell value is missing")]
    MissingValue,
}

impl EditError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::MissingRow => "row",
            Self::MissingColumn => "column",
            Self::MissingValue => "value",
        }
    }
}
