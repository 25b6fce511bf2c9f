//! Row addressing.

use std::fmt;

/// The address of a single row: a section and a row within that section.
///
/// Only [`section`](Self::section) is ever rewritten while routing; the row is
/// always relative to its own section and passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    /// Section index.
    pub section: usize,
    /// Row index inside the section.
    pub row: usize,
}

impl IndexPath {
    /// Create an index path.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the same row addressed in another section.
    pub const fn with_section(self, section: usize) -> Self {
        Self {
            section,
            row: self.row,
        }
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}
