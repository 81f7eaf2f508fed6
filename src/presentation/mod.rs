//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Formatting errors and config warnings for the terminal

pub mod cli;
pub mod output;

pub use cli::{Cli, OnInvalid};
