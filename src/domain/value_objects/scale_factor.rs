//! Scale Factor Value Object
//!
//! The multiplier applied to ingredient quantities and calories when a
//! recipe is rendered. Source quantities are never rewritten.

use std::fmt;

/// Render-time multiplier for a recipe.
///
/// Setting a new factor replaces the old one; factors never compound.
/// Positivity is assumed but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The unscaled factor (1.0)
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }

    /// Apply the factor to a quantity.
    pub fn apply(self, quantity: f64) -> f64 {
        quantity * self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for ScaleFactor {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
