//! Output helpers for the binary

use crate::config::ConfigWarning;
use crate::error::RecipeError;

/// One-line description of a config warning, for the log
pub fn describe_config_warning(warning: &ConfigWarning) -> String {
    let mut text = format!("unknown config key '{}' in {}", warning.key, warning.file.display());
    if let Some(line) = warning.line {
        text.push_str(&format!(":{}", line));
    }
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    text
}

/// Format a top-level error for stderr
pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(RecipeError::Config { file, message }) = err.downcast_ref::<RecipeError>() {
        return format!(
            "[ERROR] {}\n  fix the file at {} and try again\n",
            message,
            file.display()
        );
    }

    let mut text = format!("[ERROR] {}\n", err);
    for cause in err.chain().skip(1) {
        text.push_str(&format!("  caused by: {}\n", cause));
    }
    text
}
