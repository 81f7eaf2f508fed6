//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! There are no subcommands: the binary always runs the interactive session
//! on stdin/stdout. Flags only tune it.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::InvalidInputPolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnInvalid {
    /// Report the problem and ask again
    Reprompt,
    /// Exit with an error
    Abort,
}

impl From<OnInvalid> for InvalidInputPolicy {
    fn from(value: OnInvalid) -> Self {
        match value {
            OnInvalid::Reprompt => InvalidInputPolicy::Reprompt,
            OnInvalid::Abort => InvalidInputPolicy::Abort,
        }
    }
}

/// recipebook - record recipes, scale them, and watch the calories
#[derive(Parser, Debug)]
#[command(name = "recipebook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Recipes live in memory only and are gone when the program exits.")]
pub struct Cli {
    /// Config file (defaults to <config dir>/recipebook/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Calorie total above which a recipe prints a warning
    #[arg(long, value_name = "CALORIES", allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// What to do when a number cannot be parsed
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_invalid: Option<OnInvalid>,

    /// Verbosity level (-v, -vv, -vvv), logged to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
