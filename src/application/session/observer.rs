//! Default calorie observer

use crate::domain::ports::{CalorieObserver, CaloriesExceeded};

/// Appends `Warning: Recipe exceeds <threshold> calories!` to the render
#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieWarning;

impl CalorieWarning {
    pub fn message(event: &CaloriesExceeded<'_>) -> String {
        format!("Warning: Recipe exceeds {} calories!", event.threshold)
    }
}

impl CalorieObserver for CalorieWarning {
    fn on_calories_exceeded(&self, event: &CaloriesExceeded<'_>, output: &mut String) {
        output.push_str(&Self::message(event));
        output.push('\n');
    }
}
