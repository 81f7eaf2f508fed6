//! Reusable session transcripts.

/// Input lines entering one recipe with a single ingredient and step
#[allow(dead_code)]
pub fn recipe_input(name: &str, quantity: &str, unit: &str, calories: &str) -> String {
    [
        name,
        "1",
        "Main ingredient",
        quantity,
        unit,
        calories,
        "Other",
        "1",
        "Combine and serve",
    ]
    .join("\n")
        + "\n"
}

/// The Salad recipe used across scenarios: 2 cup, 400 calories
#[allow(dead_code)]
pub fn salad_input() -> String {
    [
        "Salad",
        "1",
        "Lettuce",
        "2",
        "cup",
        "400",
        "Vegetables",
        "2",
        "Wash the lettuce",
        "Toss with dressing",
    ]
    .join("\n")
        + "\n"
}

#[allow(dead_code)]
pub const WARNING_300: &str = "Warning: Recipe exceeds 300 calories!";
