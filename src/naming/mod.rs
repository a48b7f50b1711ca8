//! Collision-free identifier generation.
//!
//! [`ensure_unique`] tries `base`, then `base2`, `base3`, ... (shaped by a
//! [`SuffixStrategy`]) until a candidate is not in the reserved names.
//! Reserved names can come from any [`ReservedNames`] source: plain sets
//! and slices, a normalizing [`NameSet`], or a lazy projection over the
//! caller's symbols ([`SymbolNames`]).
//!
//! The string helpers that shape base names before uniqueness resolution
//! (camel case, boundary-aware prefix/suffix matching, names derived from
//! types) live here as well.

mod affix;
mod case;
mod comparison;
mod error;
mod hint;
mod reserved;
mod unique;

pub use affix::{has_prefix, has_suffix, strip_prefix_at_boundary, strip_suffix_at_boundary};
pub use case::{is_camel_case, to_camel_case, to_pascal_case};
pub use comparison::NameComparison;
pub use error::NameError;
pub use hint::{NameHint, TypeDescriptor, TypeKind};
pub use reserved::{NameSet, ReservedNames, SymbolNames};
pub use unique::{ASYNC_SUFFIX, NameGenerator, SuffixStrategy, ensure_unique};
