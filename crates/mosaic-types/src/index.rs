//! Item addressing within a sectioned collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(section, item)` pair addressing one cell.
///
/// Ordering is section-major, so sorting a list of indices yields the same
/// order the layout pass visits them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemIndex {
    pub section: usize,
    pub item: usize,
}

impl ItemIndex {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
