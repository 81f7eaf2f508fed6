//! Domain Ports
//!
//! Interfaces the domain exposes to the outer layers.

mod calorie_events;

pub use calorie_events::{CalorieObserver, CaloriesExceeded};
