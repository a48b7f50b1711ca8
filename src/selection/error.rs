use thiserror::Error;

/// Precondition violations when building a selection or its inputs.
///
/// Failing to align a span with item boundaries is not an error; see
/// [`SelectionResult::EMPTY`](super::SelectionResult::EMPTY).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{separators} separators cannot interleave {items} items")]
    SeparatorCount { items: usize, separators: usize },

    #[error("selection index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("selection starts at {first} but ends at {last}")]
    ReversedIndices { first: usize, last: usize },

    #[error("text of {len} bytes exceeds the addressable range")]
    TextTooLarge { len: usize },
}
