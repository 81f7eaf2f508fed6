//! Calorie Threshold Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Total-calorie limit above which a rendered recipe notifies its observers.
///
/// The comparison is strict: a total equal to the threshold does not notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalorieThreshold(i64);

impl CalorieThreshold {
    pub const DEFAULT: CalorieThreshold = CalorieThreshold(300);

    pub fn new(limit: i64) -> Self {
        Self(limit)
    }

    pub fn limit(self) -> i64 {
        self.0
    }

    pub fn is_exceeded_by(self, total_calories: i64) -> bool {
        total_calories > self.0
    }
}

impl Default for CalorieThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CalorieThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
