//! Selection-range resolution.
//!
//! Given an ordered sequence of positioned items and a query span, find the
//! contiguous run of items the span covers. The span may start anywhere in
//! the leading incidental content of the first item and end anywhere in the
//! trailing content (or following separator) of the last item, but it may
//! never split an item's trimmed core.
//!
//! ```
//! use syster_select::base::{Extents, TextRange};
//! use syster_select::selection::{SelectionResult, resolve};
//!
//! // "aaaa, bbbb"
//! let items = [Extents::from_offsets(0, 0, 4, 4), Extents::from_offsets(5, 6, 10, 10)];
//! let span = TextRange::new(0.into(), 10.into());
//! assert_eq!(resolve(&items[..], span), SelectionResult::new(0, 1).unwrap());
//! ```

mod error;
mod lines;
mod resolve;
mod sequence;
mod view;

pub use error::SelectionError;
pub use lines::{TextLine, TextLines};
pub use resolve::{SelectionResult, resolve};
pub use sequence::{ItemSequence, SeparatedItems};
pub use view::Selection;
