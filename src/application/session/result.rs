//! Session Result

/// How a recipe's browse loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Back to the menu, nothing changed
    Back,
    /// The whole recipe book was emptied
    Cleared,
}

/// What happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Recipes entered in the collection phase
    pub collected: usize,
    /// Recipes left in the book when the session ended
    pub remaining: usize,
    /// Number of times a recipe was rendered
    pub renders: usize,
    /// Whether `clear` was used
    pub cleared: bool,
}
