//! The forward-scan resolver.

use std::ops::RangeInclusive;

use text_size::TextRange;
use tracing::trace;

use super::error::SelectionError;
use super::sequence::ItemSequence;

/// Inclusive index range of the items covered by a span.
///
/// The empty result stands for "no selection"; in the signed sentinel form
/// (see [`to_signed`](Self::to_signed)) it is `(-1, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Option<(usize, usize)>", into = "Option<(usize, usize)>")
)]
pub struct SelectionResult {
    bounds: Option<(usize, usize)>,
}

impl SelectionResult {
    pub const EMPTY: Self = Self { bounds: None };

    /// Selection of the items `first..=last`.
    ///
    /// Fails with [`SelectionError::ReversedIndices`] when `first > last`.
    pub fn new(first: usize, last: usize) -> Result<Self, SelectionError> {
        if first > last {
            return Err(SelectionError::ReversedIndices { first, last });
        }
        Ok(Self::ordered(first, last))
    }

    /// Caller guarantees `first <= last`.
    pub(crate) fn ordered(first: usize, last: usize) -> Self {
        debug_assert!(first <= last, "selection {first}..={last} is reversed");
        Self {
            bounds: Some((first, last)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn first_index(&self) -> Option<usize> {
        self.bounds.map(|(first, _)| first)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.bounds.map(|(_, last)| last)
    }

    /// Number of selected items; `0` when empty.
    pub fn count(&self) -> usize {
        self.bounds.map_or(0, |(first, last)| last - first + 1)
    }

    pub fn is_single(&self) -> bool {
        self.count() == 1
    }

    pub fn is_multiple(&self) -> bool {
        self.count() > 1
    }

    pub fn indices(&self) -> Option<RangeInclusive<usize>> {
        self.bounds.map(|(first, last)| first..=last)
    }

    /// `(first, last)` as signed indices, `(-1, -1)` when empty.
    pub fn to_signed(&self) -> (isize, isize) {
        match self.bounds {
            Some((first, last)) => (first as isize, last as isize),
            None => (-1, -1),
        }
    }
}

impl TryFrom<Option<(usize, usize)>> for SelectionResult {
    type Error = SelectionError;

    fn try_from(bounds: Option<(usize, usize)>) -> Result<Self, Self::Error> {
        match bounds {
            Some((first, last)) => Self::new(first, last),
            None => Ok(Self::EMPTY),
        }
    }
}

impl From<SelectionResult> for Option<(usize, usize)> {
    fn from(result: SelectionResult) -> Self {
        result.bounds
    }
}

/// Resolve `span` against `sequence`.
///
/// Single forward pass:
/// 1. skip items that end at or before `span.start`
/// 2. the span must start in the leading content of that item, not its core
/// 3. extend over items until one covers `span.end`
/// 4. the span must end in the trailing content (or separator) of that
///    item, not its core
///
/// Returns [`SelectionResult::EMPTY`] for an empty sequence, an empty span,
/// or a span that does not align with item boundaries.
pub fn resolve<S>(sequence: &S, span: TextRange) -> SelectionResult
where
    S: ItemSequence + ?Sized,
{
    let count = sequence.item_count();
    if count == 0 || span.is_empty() {
        return SelectionResult::EMPTY;
    }

    let mut first = 0;
    while span.start() >= sequence.item_full_range(first).end() && first + 1 < count {
        first += 1;
    }

    let full = sequence.item_full_range(first);
    let trimmed = sequence.item_trimmed_range(first);
    if span.start() < full.start() || span.start() > trimmed.start() {
        trace!(
            "[SELECTION] start {:?} misses leading boundary of item {} (full {:?}, trimmed {:?})",
            span.start(),
            first,
            full,
            trimmed
        );
        return SelectionResult::EMPTY;
    }

    let mut last = first;
    while span.end() > sequence.coverage_end(last) && last + 1 < count {
        last += 1;
    }

    let coverage_end = sequence.coverage_end(last);
    let trimmed = sequence.item_trimmed_range(last);
    if span.end() < trimmed.end() || span.end() > coverage_end {
        trace!(
            "[SELECTION] end {:?} misses trailing boundary of item {} (trimmed {:?}, coverage end {:?})",
            span.end(),
            last,
            trimmed,
            coverage_end
        );
        return SelectionResult::EMPTY;
    }

    trace!("[SELECTION] {:?} -> items {}..={}", span, first, last);
    SelectionResult::ordered(first, last)
}
