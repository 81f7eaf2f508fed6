//! Recipe entity - named ingredients and steps with a render-time scale
//!
//! Scaling never touches stored quantities. `scale` replaces the current
//! factor and `reset_scale` goes back to 1.0, so every scaled view is
//! relative to the recipe as entered.

use std::fmt;

use crate::domain::ports::{CalorieObserver, CaloriesExceeded};
use crate::domain::value_objects::{CalorieThreshold, ScaleFactor};

use super::Ingredient;

/// A recipe owned by the session's recipe book
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    scale: ScaleFactor,
    threshold: CalorieThreshold,
    observers: Vec<Box<dyn CalorieObserver>>,
}

impl Recipe {
    /// Create an empty recipe with scale 1.0 and the default threshold
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            scale: ScaleFactor::IDENTITY,
            threshold: CalorieThreshold::DEFAULT,
            observers: Vec::new(),
        }
    }

    /// Builder: override the calorie threshold
    pub fn with_threshold(mut self, threshold: CalorieThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        self.scale
    }

    pub fn threshold(&self) -> CalorieThreshold {
        self.threshold
    }

    /// Append an ingredient. Duplicate names are allowed.
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: i64,
        food_group: impl Into<String>,
    ) {
        self.ingredients
            .push(Ingredient::new(name, quantity, unit, calories, food_group));
    }

    pub fn add_step(&mut self, step: impl Into<String>) {
        self.steps.push(step.into());
    }

    /// Replace the scale factor (last write wins, never cumulative)
    pub fn scale(&mut self, factor: impl Into<ScaleFactor>) {
        self.scale = factor.into();
    }

    pub fn reset_scale(&mut self) {
        self.scale = ScaleFactor::IDENTITY;
    }

    /// Register an observer; observers fire in registration order
    pub fn subscribe(&mut self, observer: impl CalorieObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Sum of ingredient calories times the scale factor, truncated toward zero.
    pub fn total_calories(&self) -> i64 {
        // i128 so totals past i64::MAX cannot overflow before scaling
        let unscaled: i128 = self
            .ingredients
            .iter()
            .map(|ingredient| i128::from(ingredient.calories()))
            .sum();
        // `as` truncates toward zero and saturates out-of-range values
        (unscaled as f64 * self.scale.value()) as i64
    }

    pub fn exceeds_threshold(&self) -> bool {
        self.threshold.is_exceeded_by(self.total_calories())
    }

    /// Render the recipe as a text block.
    ///
    /// Observers are notified on every call where the total is over the
    /// threshold, after the `Total Calories:` line and before `Steps:`.
    pub fn render(&self) -> String {
        let mut out = format!("Recipe: {}\n\nIngredients:\n", self.name);
        for ingredient in &self.ingredients {
            out.push_str(&format!(
                "{}: {} {}\n",
                ingredient.name(),
                self.scale.apply(ingredient.quantity()),
                ingredient.unit()
            ));
        }

        let total = self.total_calories();
        out.push_str(&format!("\nTotal Calories: {}\n", total));

        if self.threshold.is_exceeded_by(total) {
            self.notify(total, &mut out);
        }

        out.push_str("\nSteps:\n");
        for step in &self.steps {
            out.push_str(step);
            out.push('\n');
        }
        out
    }

    fn notify(&self, total_calories: i64, out: &mut String) {
        tracing::debug!(
            recipe = %self.name,
            total_calories,
            threshold = %self.threshold,
            observers = self.observers.len(),
            "calorie threshold exceeded"
        );
        let event = CaloriesExceeded {
            recipe_name: &self.name,
            total_calories,
            threshold: self.threshold,
        };
        for observer in &self.observers {
            observer.on_calories_exceeded(&event, out);
        }
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.name)
            .field("ingredients", &self.ingredients)
            .field("steps", &self.steps)
            .field("scale", &self.scale)
            .field("threshold", &self.threshold)
            .field("observers", &self.observers.len())
            .finish()
    }
}
