//! Positioned items.
//!
//! An item occupies two nested ranges of the source:
//!
//! ```text
//!   /* lead */  item_core  // trail
//!   ^-----------full-----------------^
//!               ^-trimmed-^
//! ```
//!
//! The full range includes incidental content such as whitespace and
//! comments; the trimmed range is the semantically significant core.

use text_size::{TextRange, TextSize};

/// An item with a full (outer) and trimmed (inner) extent.
///
/// Implementors must keep `trimmed_range()` inside `full_range()`.
pub trait Extent {
    /// Outer bounds, including surrounding incidental content.
    fn full_range(&self) -> TextRange;

    /// Inner, semantically significant bounds.
    fn trimmed_range(&self) -> TextRange {
        self.full_range()
    }
}

impl Extent for TextRange {
    fn full_range(&self) -> TextRange {
        *self
    }
}

impl<T: Extent + ?Sized> Extent for &T {
    fn full_range(&self) -> TextRange {
        (**self).full_range()
    }

    fn trimmed_range(&self) -> TextRange {
        (**self).trimmed_range()
    }
}

/// Plain value form of an [`Extent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extents {
    pub full: TextRange,
    pub trimmed: TextRange,
}

impl Extents {
    pub fn new(full: TextRange, trimmed: TextRange) -> Self {
        debug_assert!(
            full.contains_range(trimmed),
            "trimmed range {trimmed:?} escapes full range {full:?}"
        );
        Self { full, trimmed }
    }

    /// An item without any incidental content.
    pub fn bare(range: TextRange) -> Self {
        Self::new(range, range)
    }

    /// Build from raw offsets: `full_start <= start <= end <= full_end`.
    pub fn from_offsets(full_start: u32, start: u32, end: u32, full_end: u32) -> Self {
        Self::new(
            TextRange::new(TextSize::from(full_start), TextSize::from(full_end)),
            TextRange::new(TextSize::from(start), TextSize::from(end)),
        )
    }

    /// Width of the leading incidental content.
    pub fn leading_len(&self) -> TextSize {
        self.trimmed.start() - self.full.start()
    }

    /// Width of the trailing incidental content.
    pub fn trailing_len(&self) -> TextSize {
        self.full.end() - self.trimmed.end()
    }
}

impl Extent for Extents {
    fn full_range(&self) -> TextRange {
        self.full
    }

    fn trimmed_range(&self) -> TextRange {
        self.trimmed
    }
}
