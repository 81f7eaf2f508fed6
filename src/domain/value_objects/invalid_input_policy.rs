//! Invalid Input Policy Value Object
//!
//! Decides what happens when a numeric prompt receives text that does not
//! parse.

use serde::{Deserialize, Serialize};

/// Reaction to malformed numeric input
///
/// - `Reprompt`: report the problem and ask the same question again (default)
/// - `Abort`: end the session with the parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    #[default]
    Reprompt,
    Abort,
}

impl InvalidInputPolicy {
    /// Parse a policy name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "reprompt" | "retry" => Some(Self::Reprompt),
            "abort" | "fail" => Some(Self::Abort),
            _ => None,
        }
    }
}
