//! Session Module
//!
//! The interactive recipe session: collect recipes, sort them by name, then
//! browse, scale, reset and clear them.
//!
//! ## Structure
//!
//! - `options` - `SessionOptions` (threshold, command words)
//! - `observer` - `CalorieWarning`, the observer every collected recipe gets
//! - `result` - `SessionSummary`, `BrowseOutcome`
//! - `use_case` - `SessionUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use recipebook::application::session::{SessionOptions, SessionUseCase};
//! use recipebook::infrastructure::Console;
//!
//! let mut console = Console::new(stdin.lock(), stdout.lock(), policy);
//! let summary = SessionUseCase::new(SessionOptions::default()).run(&mut console)?;
//! ```

mod observer;
mod options;
mod result;
mod use_case;

pub use observer::CalorieWarning;
pub use options::SessionOptions;
pub use result::{BrowseOutcome, SessionSummary};
pub use use_case::SessionUseCase;
