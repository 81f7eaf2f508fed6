//! Property tests for recipe book ordering.

use proptest::prelude::*;

use recipebook::{Recipe, RecipeBook};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sort is ascending by byte order and stable for equal names
    #[test]
    fn property_sort_is_stable_and_case_sensitive(
        names in proptest::collection::vec("[a-cA-C]{0,3}", 0..12),
    ) {
        let mut book = RecipeBook::new();
        for (i, name) in names.iter().enumerate() {
            let mut recipe = Recipe::new(name.clone());
            recipe.add_step(i.to_string());
            book.push(recipe);
        }

        book.sort_by_name();

        let mut expected: Vec<(String, usize)> =
            names.iter().cloned().enumerate().map(|(i, n)| (n, i)).collect();
        expected.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let actual: Vec<(String, usize)> = book
            .iter()
            .map(|r| (r.name().to_string(), r.steps()[0].parse().unwrap()))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
