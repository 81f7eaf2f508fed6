//! Session Options

use crate::config::{CommandsConfig, Config};
use crate::domain::value_objects::CalorieThreshold;

/// Options for the session use case
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Calorie limit given to every collected recipe
    pub threshold: CalorieThreshold,
    /// Words for exit/back/clear/reset
    pub commands: CommandsConfig,
}

impl SessionOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            threshold: config.calories.threshold,
            commands: config.commands.clone(),
        }
    }

    pub fn with_threshold(mut self, threshold: CalorieThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub(crate) fn recipe_name_prompt(&self) -> String {
        format!("Enter recipe name (or '{}' to quit):", self.commands.exit)
    }

    pub(crate) fn menu_prompt(&self) -> String {
        format!(
            "Enter recipe number to display (or '{}' to quit):",
            self.commands.exit
        )
    }

    pub(crate) fn scale_prompt(&self) -> String {
        format!(
            "Enter scale factor (0.5, 2, 3), '{}' to reset scale, '{}' to clear recipe data, or '{}' to go back:",
            self.commands.reset, self.commands.clear, self.commands.back
        )
    }
}
