//! recipebook - interactive console recipe book
//!
//! Record recipes (ingredients and steps), view them scaled by any factor,
//! and get a warning whenever a rendered recipe goes over a calorie
//! threshold. Everything lives in memory for one session.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{SessionOptions, SessionSummary, SessionUseCase};
pub use config::Config;
pub use domain::entities::{Ingredient, Recipe, RecipeBook};
pub use domain::ports::{CalorieObserver, CaloriesExceeded};
pub use domain::value_objects::{CalorieThreshold, InvalidInputPolicy, ScaleFactor};
pub use error::{NumberKind, ParseError, RecipeError, RecipeResult};
pub use infrastructure::Console;
