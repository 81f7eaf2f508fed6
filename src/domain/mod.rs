//! Domain Layer
//!
//! Recipe modeling without I/O: entities, value objects, and the observer
//! port used for calorie notifications.
//!
//! ## Structure
//!
//! - `entities/` - Ingredient, Recipe, RecipeBook
//! - `value_objects/` - ScaleFactor, CalorieThreshold, InvalidInputPolicy
//! - `ports/` - CalorieObserver

pub mod entities;
pub mod ports;
pub mod value_objects;
