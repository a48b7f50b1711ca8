//! Prefix and suffix matching at word boundaries.
//!
//! `Foo` is a prefix of `FooBar` and `foo_bar`'s `foo` is a prefix too, but
//! `Foo` is not a prefix of `Foobar`: the split has to fall where one word
//! of the identifier ends and the next begins.

use super::comparison::NameComparison;

fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-'
}

/// Whether an identifier can be split between `before` and `after`.
fn is_boundary(before: char, after: char) -> bool {
    if is_separator(before) {
        !is_separator(after)
    } else if before.is_numeric() {
        is_separator(after)
    } else if before.is_lowercase() {
        is_separator(after) || after.is_uppercase()
    } else {
        is_separator(after)
    }
}

/// Byte length of the part of `value` matching `prefix`.
///
/// Both sides are compared in folded form, so the match has to end on a
/// char of `value` whose fold completes the folded prefix.
fn match_prefix(value: &str, prefix: &str, comparison: NameComparison) -> Option<usize> {
    let target = comparison.key(prefix);
    let mut folded = String::with_capacity(target.len());
    for (index, ch) in value.char_indices() {
        if folded == target {
            return Some(index);
        }
        comparison.push_folded(ch, &mut folded);
        if !target.starts_with(folded.as_str()) {
            return None;
        }
    }
    (folded == target).then_some(value.len())
}

/// Byte offset where the part of `value` matching `suffix` starts.
fn match_suffix(value: &str, suffix: &str, comparison: NameComparison) -> Option<usize> {
    let target = comparison.key(suffix);
    let mut folded = String::with_capacity(target.len());
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        if folded == target {
            return Some(start);
        }
        let mut piece = String::new();
        comparison.push_folded(ch, &mut piece);
        folded.insert_str(0, &piece);
        if !target.ends_with(folded.as_str()) {
            return None;
        }
        start = index;
    }
    (folded == target).then_some(start)
}

/// Whether `value[..split]` and `value[split..]` are both non-empty and
/// meet at a word boundary.
fn splits_at_boundary(value: &str, split: usize) -> bool {
    let before = value[..split].chars().next_back();
    let after = value[split..].chars().next();
    match (before, after) {
        (Some(before), Some(after)) => is_boundary(before, after),
        _ => false,
    }
}

/// `value` with `prefix` removed, if the prefix ends at a word boundary and
/// something remains.
///
/// ```
/// use syster_select::naming::{NameComparison, strip_prefix_at_boundary};
///
/// let ordinal = NameComparison::Ordinal;
/// assert_eq!(strip_prefix_at_boundary("FooBar", "Foo", ordinal), Some("Bar"));
/// assert_eq!(strip_prefix_at_boundary("Foobar", "Foo", ordinal), None);
/// ```
pub fn strip_prefix_at_boundary<'a>(
    value: &'a str,
    prefix: &str,
    comparison: NameComparison,
) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let split = match_prefix(value, prefix, comparison)?;
    splits_at_boundary(value, split).then(|| &value[split..])
}

/// `value` with `suffix` removed, if the suffix starts at a word boundary
/// and something remains.
pub fn strip_suffix_at_boundary<'a>(
    value: &'a str,
    suffix: &str,
    comparison: NameComparison,
) -> Option<&'a str> {
    if suffix.is_empty() {
        return None;
    }
    let split = match_suffix(value, suffix, comparison)?;
    splits_at_boundary(value, split).then(|| &value[..split])
}

pub fn has_prefix(value: &str, prefix: &str, comparison: NameComparison) -> bool {
    strip_prefix_at_boundary(value, prefix, comparison).is_some()
}

pub fn has_suffix(value: &str, suffix: &str, comparison: NameComparison) -> bool {
    strip_suffix_at_boundary(value, suffix, comparison).is_some()
}
