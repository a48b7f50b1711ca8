//! Item sequences the resolver can scan.

use text_size::{TextRange, TextSize};

use super::error::SelectionError;
use super::resolve::{SelectionResult, resolve};
use super::view::Selection;
use crate::base::Extent;

/// An ordered, indexable sequence of positioned items.
///
/// Indices passed to the accessors are always `< item_count()`.
pub trait ItemSequence {
    fn item_count(&self) -> usize;

    fn item_full_range(&self, index: usize) -> TextRange;

    fn item_trimmed_range(&self, index: usize) -> TextRange;

    /// End of the text covered by the item at `index`, including any
    /// separator that follows it.
    fn coverage_end(&self, index: usize) -> TextSize {
        self.item_full_range(index).end()
    }
}

impl<T: Extent> ItemSequence for [T] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_full_range(&self, index: usize) -> TextRange {
        self[index].full_range()
    }

    fn item_trimmed_range(&self, index: usize) -> TextRange {
        self[index].trimmed_range()
    }
}

impl<T: Extent> ItemSequence for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_full_range(&self, index: usize) -> TextRange {
        self[index].full_range()
    }

    fn item_trimmed_range(&self, index: usize) -> TextRange {
        self[index].trimmed_range()
    }
}

/// Items interleaved with separators, as in `a, b, c`.
///
/// Separator `i` follows item `i`. A list either has one separator fewer
/// than items, or as many (a trailing separator). A separator extends the
/// coverage of the item before it, except for a trailing separator: the
/// last item always ends at its own full end.
#[derive(Debug)]
pub struct SeparatedItems<'a, T, S> {
    items: &'a [T],
    separators: &'a [S],
}

impl<T, S> Clone for SeparatedItems<'_, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for SeparatedItems<'_, T, S> {}

impl<'a, T, S> SeparatedItems<'a, T, S> {
    pub fn new(items: &'a [T], separators: &'a [S]) -> Result<Self, SelectionError> {
        let fits = separators.len() == items.len()
            || separators.len() + 1 == items.len()
            || (items.is_empty() && separators.is_empty());
        if !fits {
            return Err(SelectionError::SeparatorCount {
                items: items.len(),
                separators: separators.len(),
            });
        }
        Ok(Self { items, separators })
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn separators(&self) -> &'a [S] {
        self.separators
    }

    /// The separator following the item at `index`, if any.
    pub fn separator(&self, index: usize) -> Option<&'a S> {
        self.separators.get(index)
    }

    pub fn has_trailing_separator(&self) -> bool {
        !self.items.is_empty() && self.separators.len() == self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Extent, S: Extent> SeparatedItems<'a, T, S> {
    pub fn resolve(&self, span: TextRange) -> SelectionResult {
        resolve(self, span)
    }

    pub fn select(&self, span: TextRange) -> Option<Selection<'a, T>> {
        Selection::from_result(self.items, self.resolve(span))
    }
}

impl<T: Extent, S: Extent> ItemSequence for SeparatedItems<'_, T, S> {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_full_range(&self, index: usize) -> TextRange {
        self.items[index].full_range()
    }

    fn item_trimmed_range(&self, index: usize) -> TextRange {
        self.items[index].trimmed_range()
    }

    fn coverage_end(&self, index: usize) -> TextSize {
        match self.separators.get(index) {
            Some(separator) if index + 1 < self.items.len() => separator.full_range().end(),
            _ => self.items[index].full_range().end(),
        }
    }
}
