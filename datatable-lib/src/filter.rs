//! Global (cross-column) filtering using nucleo-matcher.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::model::{Column, TableRow};

/// A compiled global filter.
///
/// A row matches when the rendered value of any column contains the filter
/// text, ignoring case. Only an empty filter matches every row; whitespace
/// is matched like any other character.
///
/// # Example
///
/// ```ignore
/// let mut filter = GlobalFilter::new("phel");
/// assert!(filter.matches_text("Michael Phelps"));
/// ```
pub struct GlobalFilter {
    atom: Option<Atom>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl GlobalFilter {
    /// Compile a filter string.
    pub fn new(query: &str) -> Self {
        let atom = (!query.is_empty()).then(|| {
            Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Substring,
                false,
            )
        });
        Self {
            atom,
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Returns true if this filter lets every row through.
    pub fn is_empty(&self) -> bool {
        self.atom.is_none()
    }

    /// Check a single rendered value.
    pub fn matches_text(&mut self, text: &str) -> bool {
        let Some(atom) = &self.atom else {
            return true;
        };
        let haystack = Utf32Str::new(text, &mut self.buf);
        atom.score(haystack, &mut self.matcher).is_some()
    }

    /// Check every column of a row.
    pub fn matches_row<T: TableRow>(&mut self, row: &T, columns: &[Column]) -> bool {
        if self.is_empty() {
            return true;
        }
        columns
            .iter()
            .any(|column| self.matches_text(&row.value(&column.id).to_string()))
    }
}

impl std::fmt::Debug for GlobalFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalFilter")
            .field("empty", &self.is_empty())
            .finish()
    }
}
