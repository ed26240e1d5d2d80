//! # Numbered Entries
//!
//! Entries carry no stable id, so everything shown to a user is numbered on the way out.
//! Two numberings exist and share [`DisplayEntry`]:
//!
//! - **Positions** (list, view, edit): the entry's 1-based place in the directory. Page 2 of
//!   size 5 starts at position 6.
//! - **Result indexes** (search): 1, 2, 3... over the matches only. A result index says
//!   nothing about where the entry lives in the directory.
//!
//! Positions shift if entries are ever reordered. No operation does that today.

use crate::model::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

impl DisplayEntry {
    pub fn new(index: usize, entry: Entry) -> Self {
        Self { index, entry }
    }
}

/// Numbers `entries` consecutively starting at `first`.
pub fn number_from<I>(entries: I, first: usize) -> Vec<DisplayEntry>
where
    I: IntoIterator<Item = Entry>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(offset, entry)| DisplayEntry::new(first + offset, entry))
        .collect()
}

/// Where a page sits within the whole directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageInfo {
    /// Number of non-empty pages. Zero for an empty directory.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1))
    }
}
