//! Property tests for list widget cursor and scroll bounds.

use proptest::prelude::*;

use craftree::tree::{Input, NoPrompt};
use craftree::ui::list::ListWidget;
use craftree::{ItemId, JsonStore, Node, RecipeBook, TreeContext, UnitTable};

/// A small tree with alternatives, tags, and dead ends
fn book() -> RecipeBook {
    let mut book = RecipeBook::default();
    book.add_recipe(
        1,
        "crafting_shaped",
        "piston",
        1,
        vec![
            (ItemId::tag("planks"), 3),
            (ItemId::item("cobblestone"), 4),
            (ItemId::item("iron_ingot"), 1),
            (ItemId::item("redstone"), 1),
        ],
    );
    book.add_recipe(2, "crafting_shapeless", "oak_planks", 4, vec![(ItemId::item("oak_log"), 1)]);
    book.add_recipe(3, "smelting", "iron_ingot", 1, vec![(ItemId::item("raw_iron"), 1)]);
    book.add_recipe(4, "crafting_shapeless", "iron_ingot", 9, vec![(ItemId::item("iron_block"), 1)]);
    book.add_tag("planks", vec!["oak_planks".to_string(), "spruce_planks".to_string()]);
    book
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => Just(Input::Down),
        3 => Just(Input::Up),
        2 => Just(Input::Select),
        1 => Just(Input::Left),
        1 => Just(Input::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after every draw the cursor is inside the list and on screen.
    #[test]
    fn property_cursor_stays_visible(
        inputs in proptest::collection::vec((input(), 1usize..=8), 1..60),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(book(), dir.path().join("plans.toml"));
        let units = UnitTable::default();
        let ctx = TreeContext::new(&store, &units);
        let mut list = ListWidget::new(Node::ingredient(ItemId::item("piston"), 5), &ctx).unwrap();

        for (input, height) in inputs {
            list.input(input, height, &ctx, &mut NoPrompt).unwrap();
            list.render(height, true);

            prop_assert!(!list.items().is_empty());
            prop_assert!(list.cursor() < list.items().len());
            prop_assert!(list.scroll() <= list.cursor());
            prop_assert!(list.cursor() < list.scroll() + height);
        }
    }
}
