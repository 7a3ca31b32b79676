use thiserror::Error;

/// Why an edit left the formula untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EditRejection {
    #[error("number literal would become malformed")]
    MalformedNumber,
    #[error("selection is inverted or out of bounds")]
    InvalidSelection,
    #[error("nothing to delete left of the cursor")]
    NothingToDelete,
    #[error("cursor is outside the rendered formula")]
    CursorOutOfRange,
    #[error("structural tokens can only be edited through a selection")]
    StructureProtected,
    #[error("function call could not be resolved")]
    UnresolvedFunction,
    #[error("edit would unbalance brackets")]
    UnbalancedBrackets,
}

/// Result of feeding one key to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOutcome {
    Applied,
    /// Tokens, extern text and cursor are unchanged.
    Rejected(EditRejection),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<EditRejection> {
        match self {
            EditOutcome::Applied => None,
            EditOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid editor options: {0}")]
    Json(#[from] serde_json::Error),
}
