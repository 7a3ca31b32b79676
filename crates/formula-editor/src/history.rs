use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::options::EditorOptions;
use crate::selection::TokenSelection;
use crate::token::InternToken;

/// Snapshot of everything an edit can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaState {
    pub tokens: Vec<InternToken>,
    pub selection: Option<TokenSelection>,
    pub extern_cursor: usize,
}

/// Bounded undo/redo stacks of [`FormulaState`] snapshots.
///
/// Hosts push the state before each edit; `undo` and `redo` take the current state so it can be
/// moved to the opposite stack.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo: VecDeque<FormulaState>,
    redo: Vec<FormulaState>,
    limit: usize,
}

impl EditHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    pub fn from_options(options: &EditorOptions) -> Self {
        Self::new(options.history_limit)
    }

    /// Record `state` as an undo point. Drops the redo stack.
    pub fn push(&mut self, state: FormulaState) {
        if self.limit == 0 || self.undo.back() == Some(&state) {
            return;
        }
        self.redo.clear();
        self.undo.push_back(state);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }

    /// The state to restore for one undo step, skipping snapshots equal to `current` (left behind
    /// by rejected edits).
    pub fn undo(&mut self, current: FormulaState) -> Option<FormulaState> {
        while let Some(state) = self.undo.pop_back() {
            if state != current {
                self.redo.push(current);
                return Some(state);
            }
        }
        None
    }

    pub fn redo(&mut self, current: FormulaState) -> Option<FormulaState> {
        let state = self.redo.pop()?;
        self.undo.push_back(current);
        Some(state)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
