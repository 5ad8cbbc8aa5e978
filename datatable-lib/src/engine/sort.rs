//! Sort specification and row comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::TableRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Short marker shown after a header label.
    pub fn marker(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// One entry of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn asc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Ascending)
    }

    pub fn desc(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Descending)
    }
}

/// Next state in the none -> ascending -> descending -> none cycle.
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    }
}

/// Direction of a column within a sort specification.
pub fn sort_direction_of(sorting: &[ColumnSort], column_id: &str) -> Option<SortDirection> {
    sorting
        .iter()
        .find(|s| s.column_id == column_id)
        .map(|s| s.direction)
}

/// Apply one header toggle to a sort specification.
///
/// Returns the new specification and the toggled column's new direction.
pub fn toggled(
    sorting: &[ColumnSort],
    column_id: &str,
    multi: bool,
) -> (Vec<ColumnSort>, Option<SortDirection>) {
    let next = next_direction(sort_direction_of(sorting, column_id));

    if !multi {
        let sorting = next
            .map(|direction| vec![ColumnSort::new(column_id, direction)])
            .unwrap_or_default();
        return (sorting, next);
    }

    let mut sorting = sorting.to_vec();
    match (sorting.iter().position(|s| s.column_id == column_id), next) {
        (Some(i), Some(direction)) => sorting[i].direction = direction,
        (Some(i), None) => {
            sorting.remove(i);
        }
        (None, Some(direction)) => sorting.push(ColumnSort::new(column_id, direction)),
        (None, None) => {}
    }
    (sorting, next)
}

/// Compare two rows under a sort specification.
pub fn compare_rows<T: TableRow>(a: &T, b: &T, sorting: &[ColumnSort]) -> Ordering {
    for sort in sorting {
        let ordering = a.value(&sort.column_id).compare(&b.value(&sort.column_id));
        let ordering = match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
