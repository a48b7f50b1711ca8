//! # syster-select
//!
//! Host-independent algorithms behind selection-driven refactorings.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! naming    → Unique-name generation, casing, affixes, names from types
//!   ↓
//! selection → Span → item index range resolution, selection views, lines
//!   ↓
//! flags     → Power-of-two flag values
//!   ↓
//! base      → Primitives (TextRange, TextSize, Extent)
//! ```
//!
//! `selection` and `naming` are independent of each other; a refactoring
//! typically resolves which items are selected, then picks a safe name for
//! whatever it introduces.

// ============================================================================
// MODULES
// ============================================================================

/// Foundation types: TextRange, TextSize, Extent
pub mod base;

/// Flag-value helpers
pub mod flags;

/// Selection-range resolution over positioned items
pub mod selection;

/// Collision-free identifier generation
pub mod naming;

// Re-export foundation types
pub use base::{Extent, Extents, TextRange, TextSize};
pub use naming::{NameComparison, NameGenerator, SuffixStrategy, ensure_unique};
pub use selection::{Selection, SelectionResult, resolve};
