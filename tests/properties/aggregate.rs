//! Property tests for quantity aggregation.

use std::collections::BTreeMap;

use proptest::prelude::*;

use craftree::{collapse, ItemId};

fn pair() -> impl Strategy<Value = (ItemId, u64)> {
    let name = proptest::string::string_regex("[a-c]{1,2}").unwrap();
    (name, any::<bool>(), 0u64..=10_000).prop_map(|(name, is_tag, count)| {
        let item = if is_tag {
            ItemId::tag(name)
        } else {
            ItemId::item(name)
        };
        (item, count)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: per-item totals equal the input sums, and no item is lost or invented.
    #[test]
    fn property_collapse_preserves_sums(pairs in proptest::collection::vec(pair(), 0..40)) {
        let totals = collapse(pairs.clone()).unwrap();

        let mut expected: BTreeMap<ItemId, u64> = BTreeMap::new();
        for (item, count) in &pairs {
            *expected.entry(item.clone()).or_default() += count;
        }
        prop_assert_eq!(&totals, &expected);
        prop_assert_eq!(
            totals.values().sum::<u64>(),
            pairs.iter().map(|(_, c)| c).sum::<u64>()
        );
    }

    /// PROPERTY: collapsing an already collapsed mapping changes nothing.
    #[test]
    fn property_collapse_is_idempotent(pairs in proptest::collection::vec(pair(), 0..40)) {
        let once = collapse(pairs).unwrap();
        let twice = collapse(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: input order does not matter.
    #[test]
    fn property_collapse_ignores_order(pairs in proptest::collection::vec(pair(), 0..40)) {
        let mut reversed = pairs.clone();
        reversed.reverse();
        prop_assert_eq!(collapse(pairs).unwrap(), collapse(reversed).unwrap());
    }
}
