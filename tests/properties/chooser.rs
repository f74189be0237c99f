//! Property tests for chooser cycling.

use proptest::prelude::*;

use craftree::tree::Chooser;

proptest! {
    /// PROPERTY: stepping past either end wraps to the other end.
    #[test]
    fn property_chooser_wraps_around(n in 2usize..=12) {
        let mut chooser = Chooser::new((0..n).collect::<Vec<_>>());

        prop_assert!(chooser.cycle(-1));
        prop_assert_eq!(chooser.selected_index(), n - 1);

        prop_assert!(chooser.cycle(1));
        prop_assert_eq!(chooser.selected_index(), 0);
    }

    /// PROPERTY: `k` single steps land where one step of `k` does.
    #[test]
    fn property_steps_compose(n in 2usize..=12, steps in proptest::collection::vec(prop_oneof![Just(-1isize), Just(1isize)], 0..40)) {
        let mut stepped = Chooser::new((0..n).collect::<Vec<_>>());
        for step in &steps {
            stepped.cycle(*step);
        }

        let total: isize = steps.iter().sum();
        let expected = total.rem_euclid(n as isize) as usize;
        prop_assert_eq!(stepped.selected_index(), expected);
        prop_assert_eq!(stepped.chosen(), Some(&expected));
    }

    /// PROPERTY: a single choice never moves.
    #[test]
    fn property_single_choice_is_fixed(step in -5isize..=5) {
        let mut chooser = Chooser::new(vec!["only"]);
        prop_assert!(!chooser.cycle(step));
        prop_assert_eq!(chooser.chosen(), Some(&"only"));
    }
}
