//! Property tests for calorie-exceeded notifications.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use recipebook::{CaloriesExceeded, Recipe};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each render over 300 fires every observer once, in order;
    /// renders at or under 300 fire nothing.
    #[test]
    fn property_observers_fire_once_per_render_in_order(
        calories in 0i64..1_000,
        observer_count in 0usize..5,
        renders in 1usize..4,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut recipe = Recipe::new("Generated");
        recipe.add_ingredient("x", 1.0, "unit", calories, "Other");
        for id in 0..observer_count {
            let log = Rc::clone(&log);
            recipe.subscribe(move |_: &CaloriesExceeded<'_>, _: &mut String| {
                log.borrow_mut().push(id)
            });
        }

        for _ in 0..renders {
            let _ = recipe.render();
        }

        let expected: Vec<usize> = if calories > 300 {
            (0..renders).flat_map(|_| 0..observer_count).collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(log.borrow().clone(), expected);
    }
}
