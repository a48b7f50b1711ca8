//! Sources of reserved names.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::comparison::NameComparison;

/// Something that can tell whether a name is already taken.
pub trait ReservedNames {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool;
}

impl<R: ReservedNames + ?Sized> ReservedNames for &R {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        (**self).is_reserved(name, comparison)
    }
}

impl<S: AsRef<str>> ReservedNames for [S] {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.iter()
            .any(|reserved| comparison.names_equal(reserved.as_ref(), name))
    }
}

impl<S: AsRef<str>, const N: usize> ReservedNames for [S; N] {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.as_slice().is_reserved(name, comparison)
    }
}

impl<S: AsRef<str>> ReservedNames for Vec<S> {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.as_slice().is_reserved(name, comparison)
    }
}

impl<S, H> ReservedNames for HashSet<S, H>
where
    S: Borrow<str> + AsRef<str> + Eq + Hash,
    H: BuildHasher,
{
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        match comparison {
            NameComparison::Ordinal => self.contains(name),
            NameComparison::OrdinalIgnoreCase => self
                .iter()
                .any(|reserved| comparison.names_equal(reserved.as_ref(), name)),
        }
    }
}

impl<S> ReservedNames for BTreeSet<S>
where
    S: Borrow<str> + AsRef<str> + Ord,
{
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        match comparison {
            NameComparison::Ordinal => self.contains(name),
            NameComparison::OrdinalIgnoreCase => self
                .iter()
                .any(|reserved| comparison.names_equal(reserved.as_ref(), name)),
        }
    }
}

/// Either source reserves the name.
impl<A: ReservedNames, B: ReservedNames> ReservedNames for (A, B) {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.0.is_reserved(name, comparison) || self.1.is_reserved(name, comparison)
    }
}

/// A set of names with constant-time membership under both comparisons.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    exact: FxHashSet<SmolStr>,
    folded: FxHashSet<SmolStr>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already present (ordinally).
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.exact.insert(SmolStr::new(name)) {
            return false;
        }
        self.folded
            .insert(NameComparison::OrdinalIgnoreCase.key(name));
        true
    }

    pub fn contains(&self, name: &str, comparison: NameComparison) -> bool {
        match comparison {
            NameComparison::Ordinal => self.exact.contains(name),
            NameComparison::OrdinalIgnoreCase => self.folded.contains(&comparison.key(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exact.iter().map(SmolStr::as_str)
    }
}

impl<S: AsRef<str>> Extend<S> for NameSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl ReservedNames for NameSet {
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.contains(name, comparison)
    }
}

/// Names projected lazily from the caller's symbols.
///
/// Each lookup walks the symbols and stops at the first match.
pub struct SymbolNames<'a, T, F> {
    symbols: &'a [T],
    name_of: F,
}

impl<'a, T, F> SymbolNames<'a, T, F>
where
    F: Fn(&T) -> &str,
{
    pub fn new(symbols: &'a [T], name_of: F) -> Self {
        Self { symbols, name_of }
    }

    pub fn symbols(&self) -> &'a [T] {
        self.symbols
    }
}

impl<T, F> ReservedNames for SymbolNames<'_, T, F>
where
    F: Fn(&T) -> &str,
{
    fn is_reserved(&self, name: &str, comparison: NameComparison) -> bool {
        self.symbols
            .iter()
            .any(|symbol| comparison.names_equal((self.name_of)(symbol), name))
    }
}

impl<T, F> std::fmt::Debug for SymbolNames<'_, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolNames")
            .field("symbols", &self.symbols.len())
            .finish_non_exhaustive()
    }
}
