use serde::{Deserialize, Serialize};

use crate::structure::TokenRange;

/// Who made a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionKind {
    /// Made by the user, by a double activation or as a result of an edit.
    User,
    /// Highlights the token an external parser rejected.
    ParserError,
}

/// Closed range of intern token indices.
///
/// Constructing a selection does not validate it; the editor checks it against the formula before
/// acting on it (see [`TokenSelection::range_within`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSelection {
    kind: SelectionKind,
    start: usize,
    end: usize,
}

impl TokenSelection {
    pub fn new(kind: SelectionKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn user(range: TokenRange) -> Self {
        Self::new(SelectionKind::User, range.start, range.end)
    }

    pub fn parser_error(index: usize) -> Self {
        Self::new(SelectionKind::ParserError, index, index)
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn end_index(&self) -> usize {
        self.end
    }

    /// The selected range, if it is ordered and lies within `token_count` tokens.
    pub fn range_within(&self, token_count: usize) -> Option<TokenRange> {
        (self.start <= self.end && self.end < token_count)
            .then(|| TokenRange::new(self.start, self.end))
    }
}
