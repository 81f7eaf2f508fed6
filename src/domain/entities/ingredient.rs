//! Ingredient entity - one line of a recipe's ingredient list

/// A single ingredient, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    name: String,
    /// Unscaled quantity as entered
    quantity: f64,
    unit: String,
    /// Calories for the unscaled quantity
    calories: i64,
    food_group: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: i64,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories,
            food_group: food_group.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn calories(&self) -> i64 {
        self.calories
    }

    pub fn food_group(&self) -> &str {
        &self.food_group
    }
}
