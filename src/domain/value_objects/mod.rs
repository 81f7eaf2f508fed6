//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod calorie_threshold;
mod invalid_input_policy;
mod scale_factor;

pub use calorie_threshold::CalorieThreshold;
pub use invalid_input_policy::InvalidInputPolicy;
pub use scale_factor::ScaleFactor;
