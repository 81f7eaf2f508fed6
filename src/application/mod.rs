//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SessionUseCase` - collect, sort and browse recipes over a console

pub mod session;

pub use session::{BrowseOutcome, CalorieWarning, SessionOptions, SessionSummary, SessionUseCase};
