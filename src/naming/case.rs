//! Identifier casing.

/// Lowercase the first letter after any leading underscores.
///
/// Leading underscores are dropped; `prefix_with_underscore` puts back
/// exactly one. Everything after the first letter is copied verbatim.
///
/// ```
/// use syster_select::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("FooBar", false), "fooBar");
/// assert_eq!(to_camel_case("__FooBar", false), "fooBar");
/// assert_eq!(to_camel_case("FooBar", true), "_fooBar");
/// ```
pub fn to_camel_case(value: &str, prefix_with_underscore: bool) -> String {
    let mut result = String::with_capacity(value.len() + 1);
    if prefix_with_underscore {
        result.push('_');
    }

    let rest = value.trim_start_matches('_');
    let mut chars = rest.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_lowercase());
        result.push_str(chars.as_str());
    }
    result
}

/// Uppercase the first letter after any leading underscores, which are
/// dropped.
pub fn to_pascal_case(value: &str) -> String {
    let rest = value.trim_start_matches('_');
    let mut chars = rest.chars();
    let mut result = String::with_capacity(rest.len());
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
    result
}

/// `true` when the name starts with a lowercase letter, optionally after a
/// single underscore.
pub fn is_camel_case(value: &str, allow_underscore_prefix: bool) -> bool {
    let value = match value.strip_prefix('_') {
        Some(rest) if allow_underscore_prefix => rest,
        _ => value,
    };
    value.chars().next().is_some_and(char::is_lowercase)
}
