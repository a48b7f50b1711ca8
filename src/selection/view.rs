//! Borrowed view over the selected items.

use std::slice;

use text_size::TextRange;

use super::error::SelectionError;
use super::resolve::{SelectionResult, resolve};
use crate::base::Extent;

/// A non-empty, contiguous run of items from a slice.
///
/// Iterating walks the stored index bounds, so a selection can be iterated
/// any number of times.
#[derive(Debug)]
pub struct Selection<'a, T> {
    items: &'a [T],
    first: usize,
    last: usize,
}

impl<T> Clone for Selection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Selection<'_, T> {}

impl<'a, T: Extent> Selection<'a, T> {
    /// Select the items of `items` covered by `span`, or `None` when the
    /// span does not align with item boundaries.
    pub fn create(items: &'a [T], span: TextRange) -> Option<Self> {
        Self::from_result(items, resolve(items, span))
    }

    /// Union of the full ranges of the selected items.
    pub fn full_range(&self) -> TextRange {
        self.first().full_range().cover(self.last().full_range())
    }

    /// From the core start of the first item to the core end of the last.
    pub fn trimmed_range(&self) -> TextRange {
        self.first().trimmed_range().cover(self.last().trimmed_range())
    }
}

impl<'a, T> Selection<'a, T> {
    pub fn from_indices(items: &'a [T], first: usize, last: usize) -> Result<Self, SelectionError> {
        if first > last {
            return Err(SelectionError::ReversedIndices { first, last });
        }
        if last >= items.len() {
            return Err(SelectionError::IndexOutOfRange {
                index: last,
                len: items.len(),
            });
        }
        Ok(Self { items, first, last })
    }

    pub(crate) fn from_result(items: &'a [T], result: SelectionResult) -> Option<Self> {
        let (first, last) = (result.first_index()?, result.last_index()?);
        Self::from_indices(items, first, last).ok()
    }

    /// The whole underlying list, selected or not.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Just the selected items.
    pub fn selected(&self) -> &'a [T] {
        &self.items[self.first..=self.last]
    }

    pub fn first(&self) -> &'a T {
        &self.items[self.first]
    }

    pub fn last(&self) -> &'a T {
        &self.items[self.last]
    }

    pub fn first_index(&self) -> usize {
        self.first
    }

    pub fn last_index(&self) -> usize {
        self.last
    }

    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn is_multiple(&self) -> bool {
        self.first < self.last
    }

    pub fn result(&self) -> SelectionResult {
        SelectionResult::ordered(self.first, self.last)
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.selected().iter()
    }
}

impl<'a, T> IntoIterator for Selection<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Selection<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
