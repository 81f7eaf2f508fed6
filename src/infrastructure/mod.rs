//! Infrastructure Layer
//!
//! Concrete I/O for the session.
//!
//! ## Structure
//!
//! - `console/` - prompt/response over stdin/stdout (or any reader/writer)

pub mod console;

pub use console::{parse_number, Console};
