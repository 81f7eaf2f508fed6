//! Common test utilities for recipebook scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated environment (temp config dir, clean env vars)
//! - Fixtures: reusable session input transcripts

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
