//! Property-based tests for the display slice and view state.
//!
//! Ensures the slice, rank and toggle invariants hold for arbitrary product
//! counts and interaction sequences.

use gift_ranking::{
    ranking::{format_price, visible, INITIAL_PRODUCT_COUNT},
    render_tree, CategoryFilter, DisplayOptions, Interaction, Product, TargetFilter, ViewState,
};
use proptest::prelude::*;

fn catalog(n: usize) -> Vec<Product> {
    (0..n as u64)
        .map(|i| Product::new(i, format!("Gift {i}")).with_price(1000.0))
        .collect()
}

fn interaction() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        (0..4usize).prop_map(|i| Interaction::SelectTarget(TargetFilter::ORDERED[i])),
        (0..3usize).prop_map(|i| Interaction::SelectCategory(CategoryFilter::ORDERED[i])),
        Just(Interaction::ToggleExpanded),
        (0..20usize).prop_map(Interaction::ClickProduct),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn displayed_count_follows_expansion(n in 0usize..40) {
        let products = catalog(n);
        prop_assert_eq!(visible(&products, false).len(), n.min(INITIAL_PRODUCT_COUNT));
        prop_assert_eq!(visible(&products, true).len(), n);
        // the slice is always a prefix in the supplied order
        prop_assert_eq!(visible(&products, false), &products[..n.min(INITIAL_PRODUCT_COUNT)]);
    }

    #[test]
    fn ranks_are_one_based_positions(n in 0usize..40, expanded in any::<bool>()) {
        let products = catalog(n);
        let state = ViewState::new().with_expanded(expanded);
        let tree = render_tree(&products, state, &DisplayOptions::default());
        let expected: Vec<usize> = (1..=tree.cards.len()).collect();
        prop_assert_eq!(tree.ranks(), expected);
    }

    #[test]
    fn toggling_twice_is_identity(
        steps in prop::collection::vec(interaction(), 0..30),
    ) {
        let state = steps.into_iter().fold(ViewState::new(), ViewState::apply);
        let twice = state
            .apply(Interaction::ToggleExpanded)
            .apply(Interaction::ToggleExpanded);
        prop_assert_eq!(twice, state);
        prop_assert_ne!(state.apply(Interaction::ToggleExpanded).expanded, state.expanded);
    }

    #[test]
    fn only_toggle_changes_the_cards(
        n in 0usize..20,
        steps in prop::collection::vec(interaction(), 0..30),
    ) {
        let products = catalog(n);
        let options = DisplayOptions::default();
        let mut state = ViewState::new();
        for step in steps {
            let before = render_tree(&products, state, &options);
            state = state.apply(step);
            let after = render_tree(&products, state, &options);
            if step != Interaction::ToggleExpanded {
                prop_assert_eq!(&before.cards, &after.cards);
            }
            prop_assert_eq!(after.target_tabs.iter().filter(|t| t.active).count(), 1);
            prop_assert_eq!(after.category_tabs.iter().filter(|c| c.active).count(), 1);
        }
    }

    #[test]
    fn whole_prices_have_no_decimals(price in 0u32..10_000_000) {
        let text = format_price(f64::from(price));
        prop_assert_eq!(text, format!("{price} 원"));
    }
}
