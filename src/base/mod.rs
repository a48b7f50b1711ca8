//! Foundation types shared by the selection and naming modules.
//!
//! This module provides:
//! - [`TextRange`], [`TextSize`] - Half-open source extents (byte offsets)
//! - [`Extent`] - Anything with a full and a trimmed extent
//! - [`Extents`] - The plain value form of an [`Extent`]
//!
//! This module has NO dependencies on other crate modules.

mod extent;

pub use extent::{Extent, Extents};

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
