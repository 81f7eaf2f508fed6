//! Scenario: scaling a recipe up and down
//!
//! Journey: enter a 400-calorie salad, view it, halve it, triple it, reset.
//!
//! Success Criteria:
//! - Quantities and totals follow the current factor only
//! - The warning shows on every render over 300 calories, and only then

use crate::common::*;

#[test]
fn scenario_salad_half_scale_drops_warning() {
    let env = TestEnv::new();
    let input = format!("{}exit\n1\n0.5\nback\nexit\n", salad_input());

    let result = env.run(&[], &input);

    assert!(result.success, "stderr: {}", result.stderr);
    let out = &result.stdout;
    assert!(out.contains("Recipe: Salad\n\nIngredients:\nLettuce: 2 cup\n\nTotal Calories: 400\n"));
    assert!(out.contains("Lettuce: 1 cup\n\nTotal Calories: 200\n\nSteps:\nWash the lettuce\nToss with dressing\n"));
    assert_eq!(out.matches(WARNING_300).count(), 1);
}

#[test]
fn scenario_warning_sits_between_total_and_steps() {
    let env = TestEnv::new();
    let input = format!("{}exit\n1\nback\nexit\n", salad_input());

    let result = env.run(&[], &input);

    assert!(result.stdout.contains(
        "Total Calories: 400\nWarning: Recipe exceeds 300 calories!\n\nSteps:\n"
    ));
}

#[test]
fn scenario_scaling_is_not_cumulative() {
    let env = TestEnv::new();
    let input = format!("{}exit\n1\n2\n3\nreset\nback\nexit\n", salad_input());

    let result = env.run(&[], &input);

    let out = &result.stdout;
    assert!(out.contains("Lettuce: 4 cup\n\nTotal Calories: 800\n"));
    assert!(out.contains("Lettuce: 6 cup\n\nTotal Calories: 1200\n"));
    assert!(!out.contains("Lettuce: 12 cup"));
    // initial render plus reset render
    assert_eq!(out.matches("Lettuce: 2 cup").count(), 2);
    assert_eq!(out.matches(WARNING_300).count(), 4);
}

#[test]
fn scenario_fractional_quantities_print_shortest_form() {
    let env = TestEnv::new();
    let input = format!(
        "{}exit\n1\n1.5\nback\nexit\n",
        recipe_input("Oats", "1", "cup", "150")
    );

    let result = env.run(&[], &input);

    assert!(result.stdout.contains("Main ingredient: 1.5 cup\n\nTotal Calories: 225\n"));
    assert!(!result.stdout.contains(WARNING_300));
}
