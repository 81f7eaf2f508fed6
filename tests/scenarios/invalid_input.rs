//! Scenario: mistyped numbers
//!
//! Journey: the user types words where numbers are expected.
//!
//! Success Criteria:
//! - Default: the same prompt is asked again after a short message
//! - `--on-invalid abort`: the program stops with an error and exit code 1

use crate::common::*;

#[test]
fn scenario_reprompt_on_bad_quantity() {
    let env = TestEnv::new();
    let input = "Tea\n1\nLeaves\na spoon\n1\ntsp\n2\nHerbs\n0\nexit\nexit\n";

    let result = env.run(&[], input);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains(
        "Invalid input: invalid number for ingredient quantity: 'a spoon'. Please try again.\nEnter ingredient quantity:\n"
    ));
    assert!(result.stdout.contains("1. Tea"));
}

#[test]
fn scenario_abort_policy_exits_with_error() {
    let env = TestEnv::new();

    let result = env.run(&["--on-invalid", "abort"], "Tea\nmany\n");

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("[ERROR] recipe session failed"));
    assert!(result
        .stderr
        .contains("invalid whole number for number of ingredients: 'many'"));
}

#[test]
fn scenario_abort_policy_from_environment() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &[],
        &format!("{}exit\n1\nhuge\n", salad_input()),
        &[("RECIPEBOOK_ON_INVALID", "abort")],
    );

    assert!(!result.success);
    assert!(result.stderr.contains("invalid number for scale factor: 'huge'"));
}

#[test]
fn scenario_input_ending_mid_recipe_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&[], "Tea\n1\nLeaves\n");

    assert!(!result.success);
    assert!(result
        .stderr
        .contains("input ended while waiting for: Enter ingredient quantity:"));
}
