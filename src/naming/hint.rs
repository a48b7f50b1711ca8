//! Base-name candidates derived from types.
//!
//! A refactoring that introduces a variable of some type asks the type for
//! a name hint (`List<Customer>` → `customers`) and then makes the hint
//! unique with [`ensure_unique`](super::ensure_unique).

use smol_str::SmolStr;
use unicode_ident::{is_xid_continue, is_xid_start};

use super::case::to_camel_case;

/// Anything that can propose a base name for a new identifier.
pub trait NameHint {
    /// A candidate name, or `None` when nothing sensible can be derived.
    fn name_hint(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    TypeParameter,
}

/// The shape of a type, as far as naming is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A named type; the name may be qualified (`System.String`,
    /// `Pkg::Part`) or carry generic syntax (`List<T>`, ``List`1``).
    Named { name: SmolStr, kind: TypeKind },
    Array(Box<TypeDescriptor>),
    /// Any sequence type whose element type is known.
    Collection(Box<TypeDescriptor>),
    Nullable(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn named(name: impl Into<SmolStr>, kind: TypeKind) -> Self {
        Self::Named {
            name: name.into(),
            kind,
        }
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn collection(element: TypeDescriptor) -> Self {
        Self::Collection(Box::new(element))
    }

    pub fn nullable(inner: TypeDescriptor) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// The innermost named type and whether any sequence wrapped it.
    fn element(&self) -> (&SmolStr, TypeKind, bool) {
        let mut current = self;
        let mut plural = false;
        loop {
            match current {
                Self::Named { name, kind } => return (name, *kind, plural),
                Self::Array(inner) | Self::Collection(inner) => {
                    plural = true;
                    current = &**inner;
                }
                Self::Nullable(inner) => current = &**inner,
            }
        }
    }
}

impl NameHint for TypeDescriptor {
    fn name_hint(&self) -> Option<String> {
        let (name, kind, plural) = self.element();
        let base = identifier_part(name, kind)?;
        let name = to_camel_case(&base, false);
        Some(if plural { pluralize(&name) } else { name })
    }
}

/// Simple name of a type, stripped of qualifiers, generic syntax and the
/// `I`/`T` markers of interfaces and type parameters.
fn identifier_part(name: &str, kind: TypeKind) -> Option<String> {
    let name = name.split(['`', '<']).next().unwrap_or(name);
    let name = name.rsplit(['.', ':']).next().unwrap_or(name);
    let name = match kind {
        TypeKind::Interface => strip_marker(name, 'I'),
        TypeKind::TypeParameter if name.chars().count() <= 1 => return None,
        TypeKind::TypeParameter => strip_marker(name, 'T'),
        _ => name,
    };

    let identifier: String = name.chars().filter(|&c| is_xid_continue(c)).collect();
    let first = identifier.chars().next()?;
    (first == '_' || is_xid_start(first)).then_some(identifier)
}

fn strip_marker(name: &str, marker: char) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first == marker && second.is_uppercase() => {
            &name[marker.len_utf8()..]
        }
        _ => name,
    }
}

fn pluralize(name: &str) -> String {
    const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if SIBILANTS.iter().any(|ending| name.ends_with(ending)) {
        return format!("{name}es");
    }
    if let Some(stem) = name.strip_suffix('y') {
        let vowel_before = stem
            .chars()
            .next_back()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
        if !stem.is_empty() && !vowel_before {
            return format!("{stem}ies");
        }
    }
    format!("{name}s")
}
