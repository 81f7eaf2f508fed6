//! Calorie Event Port
//!
//! Lets callers react when a rendered recipe goes over its calorie
//! threshold. Notification is synchronous: observers run inside the render
//! call, in registration order, before the step list is written.

use crate::domain::value_objects::CalorieThreshold;

/// Event passed to observers when a render crosses the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaloriesExceeded<'a> {
    pub recipe_name: &'a str,
    pub total_calories: i64,
    pub threshold: CalorieThreshold,
}

/// Trait for receiving calorie-exceeded notifications
///
/// `output` is the render buffer at the point of notification (just after
/// the `Total Calories:` line). Observers may append to it or ignore it.
pub trait CalorieObserver {
    fn on_calories_exceeded(&self, event: &CaloriesExceeded<'_>, output: &mut String);
}

impl<F> CalorieObserver for F
where
    F: Fn(&CaloriesExceeded<'_>, &mut String),
{
    fn on_calories_exceeded(&self, event: &CaloriesExceeded<'_>, output: &mut String) {
        self(event, output)
    }
}
