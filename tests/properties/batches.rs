//! Property tests for recipe batch arithmetic and the leaf/composite rules.

use proptest::prelude::*;

use craftree::tree::{batch_surplus, executions, Input, Prompter, SPLIT_KEY};
use craftree::{ItemId, JsonStore, Node, RecipeBook, Requirements, TreeContext, UnitTable};

struct FixedSplit(u64);

impl Prompter for FixedSplit {
    fn split_point(&mut self, _item: &ItemId, _count: u64) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// `A` is made `result_count` at a time from `per_craft` × `B`;
/// `#metals` holds `copper` and `iron`
fn single_recipe_store(dir: &std::path::Path, result_count: u64, per_craft: u64) -> JsonStore {
    let mut book = RecipeBook::default();
    book.add_recipe(
        1,
        "crafting",
        "A",
        result_count,
        vec![(ItemId::item("B"), per_craft)],
    );
    book.add_tag("metals", vec!["copper".to_string(), "iron".to_string()]);
    JsonStore::new(book, dir.join("plans.toml"))
}

/// Unexpanded crafting nodes of every kind, with the leaf each should report
#[derive(Debug, Clone)]
enum LeafCase {
    Item(String),
    TagDemand(String),
    Recipe,
    Tag,
}

fn leaf_case() -> impl Strategy<Value = LeafCase> {
    prop_oneof![
        "[a-z_]{1,12}".prop_map(LeafCase::Item),
        "[a-z_]{1,12}".prop_map(LeafCase::TagDemand),
        Just(LeafCase::Recipe),
        Just(LeafCase::Tag),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: executions is the smallest batch count covering the demand.
    #[test]
    fn property_executions_is_ceiling(result_count in 1u64..=64, count in 1u64..=100_000) {
        let runs = executions(count, result_count);

        prop_assert!((runs - 1) * result_count < count);
        prop_assert!(count <= runs * result_count);
        prop_assert_eq!(batch_surplus(count, result_count), Some(runs * result_count - count));
        prop_assert_eq!(batch_surplus(count, result_count) == Some(0), count % result_count == 0);
    }

    /// PROPERTY: a fully expanded single recipe needs `runs * per_craft` inputs
    /// and leaves the last batch's surplus over.
    #[test]
    fn property_expanded_recipe_reports_surplus(
        result_count in 1u64..=16,
        per_craft in 1u64..=9,
        count in 1u64..=5_000,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = single_recipe_store(dir.path(), result_count, per_craft);
        let units = UnitTable::default();
        let ctx = TreeContext::new(&store, &units);

        let mut root = Node::ingredient(ItemId::item("A"), count);
        root.expand_all(&ctx, 2).unwrap();
        let (required, leftover) = root.ingredients(&ctx).unwrap();
        let reqs = Requirements::from_pairs(required, leftover).unwrap();

        let runs = executions(count, result_count);
        prop_assert_eq!(reqs.required.get(&ItemId::item("B")), Some(&(runs * per_craft)));
        let surplus = runs * result_count - count;
        prop_assert_eq!(reqs.leftover.get(&ItemId::item("A")).copied(), (surplus > 0).then_some(surplus));
    }

    /// PROPERTY: an unexpanded crafting node is its own single requirement.
    #[test]
    fn property_unexpanded_node_is_leaf(case in leaf_case(), count in 1u64..=1_000_000) {
        let dir = tempfile::tempdir().unwrap();
        let store = single_recipe_store(dir.path(), 3, 2);
        let units = UnitTable::default();
        let ctx = TreeContext::new(&store, &units);

        let (mut node, item) = match case {
            LeafCase::Item(name) => {
                (Node::ingredient(ItemId::item(&name), count), ItemId::item(name))
            }
            LeafCase::TagDemand(name) => {
                (Node::ingredient(ItemId::tag(&name), count), ItemId::tag(name))
            }
            LeafCase::Recipe => (Node::recipe(&ctx, "A", count).unwrap(), ItemId::item("A")),
            LeafCase::Tag => (Node::tag(&ctx, "metals", count).unwrap(), ItemId::tag("metals")),
        };
        prop_assert!(!node.expanded);
        prop_assert!(node.is_expandable());

        prop_assert_eq!(node.ingredients(&ctx).unwrap(), (vec![(item, count)], Vec::new()));
        prop_assert!(node.cached_children().is_none());
    }

    /// PROPERTY: a split node contributes exactly what its two halves do,
    /// and merging restores the leaf.
    #[test]
    fn property_split_conserves_demand(count in 2u64..=10_000, seed in any::<u64>()) {
        let point = 1 + seed % (count - 1);
        let dir = tempfile::tempdir().unwrap();
        let store = single_recipe_store(dir.path(), 3, 2);
        let units = UnitTable::default();
        let ctx = TreeContext::new(&store, &units);

        let mut node = Node::ingredient(ItemId::item("A"), count);
        node.input(&Input::Char(SPLIT_KEY), &mut FixedSplit(point));
        prop_assert!(node.expanded);

        let mut expected = Vec::new();
        for child in node.children(&ctx).unwrap().iter_mut() {
            let (required, _) = child.ingredients(&ctx).unwrap();
            expected.extend(required);
        }
        prop_assert_eq!(
            expected.clone(),
            vec![(ItemId::item("A"), point), (ItemId::item("A"), count - point)]
        );
        prop_assert_eq!(node.ingredients(&ctx).unwrap().0, expected);

        node.input(&Input::Char(SPLIT_KEY), &mut FixedSplit(point));
        node.expanded = false;
        prop_assert_eq!(
            node.ingredients(&ctx).unwrap(),
            (vec![(ItemId::item("A"), count)], Vec::new())
        );
    }
}
