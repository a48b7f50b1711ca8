#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use rstest::rstest;
use syster_select::naming::{
    NameComparison, NameGenerator, NameHint, NameSet, SuffixStrategy, SymbolNames, TypeDescriptor,
    TypeKind, ensure_unique, strip_suffix_at_boundary, to_camel_case,
};

/// A member of the scope a new identifier is introduced into.
struct Member {
    name: String,
    is_method: bool,
}

fn member_name(member: &Member) -> &str {
    &member.name
}

fn scope() -> Vec<Member> {
    ["Load", "LoadAsync", "Load2Async", "count", "items"]
        .into_iter()
        .map(|name| Member {
            name: name.to_string(),
            is_method: name.starts_with("Load"),
        })
        .collect()
}

#[rstest]
#[case("item", &["item", "item2", "item3"], "item4")]
#[case("Process", &[], "ProcessAsync")]
#[case("ProcessAsync", &["ProcessAsync"], "Process2Async")]
fn test_documented_examples(#[case] base: &str, #[case] reserved: &[&str], #[case] expected: &str) {
    let strategy = if expected.ends_with("Async") {
        SuffixStrategy::ASYNC
    } else {
        SuffixStrategy::NUMERIC
    };
    let name = ensure_unique(base, reserved, NameComparison::Ordinal, &strategy).unwrap();
    assert_eq!(name, expected);
}

#[test]
fn test_async_method_name_against_scope() {
    let members = scope();
    let reserved = SymbolNames::new(&members, member_name);
    assert!(members.iter().any(|m| m.is_method));

    let name = NameGenerator::async_method()
        .ensure_unique("Load", &reserved)
        .unwrap();
    assert_eq!(name, "Load3Async");
}

#[test]
fn test_local_name_from_type_against_scope() {
    let members = scope();
    let reserved: NameSet = members.iter().map(member_name).collect();

    let element = TypeDescriptor::named("MyApp.Models.Item", TypeKind::Class);
    let hint = TypeDescriptor::collection(element).name_hint().unwrap();
    assert_eq!(hint, "items");

    let name = NameGenerator::numeric().ensure_unique(&hint, &reserved).unwrap();
    assert_eq!(name, "items2");
}

#[test]
fn test_field_name_from_property() {
    let field = to_camel_case("Count", true);
    let reserved: HashSet<&str> = ["_count"].into_iter().collect();
    let name = NameGenerator::numeric().ensure_unique(&field, &reserved).unwrap();
    assert_eq!(name, "_count2");
}

#[test]
fn test_strip_async_before_renaming() {
    let stem = strip_suffix_at_boundary("FetchAsync", "Async", NameComparison::Ordinal).unwrap();
    assert_eq!(stem, "Fetch");
    assert_eq!(
        strip_suffix_at_boundary("Fetchasync", "Async", NameComparison::Ordinal),
        None
    );
}

#[test]
fn test_case_insensitive_scope() {
    let reserved = ["Item", "ITEM2"];
    let generator = NameGenerator::numeric().with_comparison(NameComparison::OrdinalIgnoreCase);
    assert_eq!(generator.ensure_unique("item", &reserved).unwrap(), "item3");
}
