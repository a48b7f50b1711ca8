//! Unique-name properties over generated reserved sets.

use proptest::prelude::*;
use syster_select::naming::{NameComparison, NameSet, SuffixStrategy, ensure_unique};

fn comparison() -> impl Strategy<Value = NameComparison> {
    prop_oneof![
        Just(NameComparison::Ordinal),
        Just(NameComparison::OrdinalIgnoreCase),
    ]
}

fn strategy() -> impl Strategy<Value = SuffixStrategy> {
    prop_oneof![Just(SuffixStrategy::NUMERIC), Just(SuffixStrategy::ASYNC)]
}

proptest! {
    #[test]
    fn prop_result_is_not_reserved(
        base in "[a-cA-C]{1,2}",
        reserved in prop::collection::vec("[a-cA-C]{1,2}[2-4]?(Async)?", 0..24),
        comparison in comparison(),
        strategy in strategy(),
    ) {
        let name = ensure_unique(&base, &reserved, comparison, &strategy).unwrap();
        prop_assert!(!reserved.iter().any(|r| comparison.names_equal(r, &name)));
    }

    #[test]
    fn prop_free_base_is_returned_unchanged(
        base in "[a-z]{1,8}",
        reserved in prop::collection::vec("[A-Z][a-z]{0,8}", 0..16),
    ) {
        let name = ensure_unique(&base, &reserved, NameComparison::Ordinal, &SuffixStrategy::NUMERIC).unwrap();
        prop_assert_eq!(name, base);
    }

    #[test]
    fn prop_no_gaps_are_skipped(base in "[a-z]{1,8}", taken in 0u32..30) {
        let reserved: NameSet = (1..=taken)
            .map(|n| SuffixStrategy::NUMERIC.candidate(&base, n))
            .collect();
        let name = ensure_unique(&base, &reserved, NameComparison::Ordinal, &SuffixStrategy::NUMERIC).unwrap();

        let expected = if taken == 0 { base.clone() } else { format!("{base}{}", taken + 1) };
        prop_assert_eq!(name, expected);
    }

    #[test]
    fn prop_deterministic(
        base in "[a-z]{1,4}",
        reserved in prop::collection::vec("[a-z]{1,4}[0-9]?", 0..16),
        strategy in strategy(),
    ) {
        let first = ensure_unique(&base, &reserved, NameComparison::Ordinal, &strategy);
        let second = ensure_unique(&base, &reserved, NameComparison::Ordinal, &strategy);
        prop_assert_eq!(first, second);
    }
}
