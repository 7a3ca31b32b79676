use std::ops::Range;

use crate::cursor::{resolve_cursor_token, Activation, CursorToken};
use crate::edit::{CursorPlacement, Edit, EditContext};
use crate::error::{EditOutcome, EditRejection};
use crate::history::FormulaState;
use crate::keyboard::EditKey;
use crate::locale::DisplayResolver;
use crate::mapping::ExternInternMapping;
use crate::options::EditorOptions;
use crate::render::{render, RenderedFormula};
use crate::selection::TokenSelection;
use crate::structure;
use crate::token::InternToken;

/// A formula being edited: the intern token sequence plus its rendered extern text, the extern
/// cursor and the current selection.
///
/// The extern view is only as fresh as the last render. Every committed edit re-renders with the
/// resolver it was given; hosts call [`InternFormula::generate_extern_formula`] after switching
/// locales.
#[derive(Debug, Clone)]
pub struct InternFormula {
    tokens: Vec<InternToken>,
    extern_text: String,
    mapping: ExternInternMapping,
    extern_cursor: usize,
    cursor_token: Option<CursorToken>,
    selection: Option<TokenSelection>,
    options: EditorOptions,
}

impl InternFormula {
    pub fn new(tokens: Vec<InternToken>) -> Self {
        Self::with_options(tokens, EditorOptions::default())
    }

    pub fn with_options(tokens: Vec<InternToken>, options: EditorOptions) -> Self {
        Self {
            tokens,
            extern_text: String::new(),
            mapping: ExternInternMapping::default(),
            extern_cursor: 0,
            cursor_token: None,
            selection: None,
            options,
        }
    }

    /// Re-render the extern text and mapping. The cursor is clamped to the new text.
    pub fn generate_extern_formula(&mut self, resolver: &dyn DisplayResolver) {
        let RenderedFormula { text, mapping } = render(&self.tokens, resolver);
        self.extern_text = text;
        self.mapping = mapping;
        self.extern_cursor = self.extern_cursor.min(self.mapping.extern_len());
        self.cursor_token = resolve_cursor_token(&self.mapping, self.extern_cursor);
    }

    fn is_rendered(&self) -> bool {
        self.mapping.token_count() == self.tokens.len()
    }

    /// Move the cursor to the extern `offset` (clamped to the text).
    ///
    /// Any previous selection is dropped. A [`Activation::Double`] then selects the group under
    /// the cursor: a whole function call for its name, brackets or delimiters, a whole bracket
    /// group for either bracket, the token itself otherwise.
    pub fn set_cursor_and_selection(&mut self, offset: usize, activation: Activation) {
        self.extern_cursor = offset.min(self.mapping.extern_len());
        self.cursor_token = resolve_cursor_token(&self.mapping, self.extern_cursor);
        self.selection = match (activation, self.cursor_token) {
            (Activation::Double, Some(cursor)) => {
                structure::group_at(&self.tokens, cursor.index).map(TokenSelection::user)
            }
            _ => None,
        };
    }

    /// Apply one key to the formula.
    ///
    /// A rejected key leaves tokens, extern text and cursor untouched. Only an invalid selection
    /// is dropped on rejection.
    pub fn handle_key_input(
        &mut self,
        key: EditKey,
        resolver: &dyn DisplayResolver,
    ) -> EditOutcome {
        if !self.is_rendered() {
            self.generate_extern_formula(resolver);
        }

        let ctx = EditContext {
            tokens: &self.tokens,
            mapping: &self.mapping,
            extern_cursor: self.extern_cursor,
            cursor_token: self.cursor_token,
            selection: self.selection,
            select_first_parameter: self.options.select_first_parameter,
        };
        let result = ctx
            .apply(&key)
            .and_then(|edit| self.check_structure(edit));

        match result {
            Ok(edit) => {
                self.commit(edit, resolver);
                log::trace!(
                    "applied {key:?}: {:?} (cursor {})",
                    self.extern_text,
                    self.extern_cursor
                );
                EditOutcome::Applied
            }
            Err(reason) => {
                if reason == EditRejection::InvalidSelection {
                    self.selection = None;
                }
                log::debug!("rejected {key:?} at cursor {}: {reason}", self.extern_cursor);
                EditOutcome::Rejected(reason)
            }
        }
    }

    /// Structure the formula already had must survive the edit. Formulas that were malformed
    /// before are edited best-effort.
    fn check_structure(&self, edit: Edit) -> Result<Edit, EditRejection> {
        if structure::is_well_nested(&self.tokens) && !structure::is_well_nested(&edit.tokens) {
            return Err(EditRejection::UnbalancedBrackets);
        }
        if structure::is_well_formed(&self.tokens) && !structure::is_well_formed(&edit.tokens) {
            return Err(EditRejection::StructureProtected);
        }
        Ok(edit)
    }

    fn commit(&mut self, edit: Edit, resolver: &dyn DisplayResolver) {
        self.tokens = edit.tokens;
        self.selection = edit.selection;
        self.generate_extern_formula(resolver);
        self.extern_cursor = match edit.cursor {
            CursorPlacement::RightOf(index) => self.right_of(index),
            CursorPlacement::LeftOf(index) => self.left_of(index),
            CursorPlacement::Extern(offset) => offset.min(self.mapping.extern_len()),
        };
        self.cursor_token = resolve_cursor_token(&self.mapping, self.extern_cursor);
    }

    /// Extern offset just after token `index`; indices past the end stick to the last token.
    fn right_of(&self, index: usize) -> usize {
        let Some(last) = self.mapping.token_count().checked_sub(1) else {
            return self.extern_cursor;
        };
        self.mapping
            .extern_end(index.min(last))
            .unwrap_or(self.extern_cursor)
    }

    /// Extern offset of the first char of token `index`; indices past the end move right of the
    /// last token.
    fn left_of(&self, index: usize) -> usize {
        if self.mapping.is_empty() {
            return 0;
        }
        if index >= self.mapping.token_count() {
            return self.right_of(index);
        }
        self.mapping
            .extern_start(index)
            .unwrap_or(self.extern_cursor)
    }

    pub fn extern_formula_string(&self) -> &str {
        &self.extern_text
    }

    pub fn extern_cursor_position(&self) -> usize {
        self.extern_cursor
    }

    pub fn selection(&self) -> Option<&TokenSelection> {
        self.selection.as_ref()
    }

    pub fn tokens(&self) -> &[InternToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn cursor_token(&self) -> Option<CursorToken> {
        self.cursor_token
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn mapping(&self) -> &ExternInternMapping {
        &self.mapping
    }

    /// The selected tokens, if the selection is valid for the current formula.
    pub fn selected_tokens(&self) -> Option<&[InternToken]> {
        let range = self.selection?.range_within(self.tokens.len())?;
        Some(&self.tokens[range.start..=range.end])
    }

    /// Extern chars covered by the selection, from the first selected token's first char to the
    /// last selected token's last char.
    pub fn extern_selection_range(&self) -> Option<Range<usize>> {
        let range = self.selection?.range_within(self.tokens.len())?;
        Some(self.mapping.extern_start(range.start)?..self.mapping.extern_end(range.end)?)
    }

    pub fn select_whole_formula(&mut self) {
        let Some(last) = self.tokens.len().checked_sub(1) else {
            self.selection = None;
            return;
        };
        self.selection = Some(TokenSelection::user(structure::TokenRange::new(0, last)));
        self.extern_cursor = self.right_of(last);
        self.cursor_token = resolve_cursor_token(&self.mapping, self.extern_cursor);
    }

    /// Highlight the token an external parser stopped at and put the cursor right of it.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of bounds.
    pub fn select_parse_error_token(&mut self, index: usize) -> bool {
        if index >= self.tokens.len() {
            return false;
        }
        self.selection = Some(TokenSelection::parser_error(index));
        self.extern_cursor = self.right_of(index);
        self.cursor_token = resolve_cursor_token(&self.mapping, self.extern_cursor);
        true
    }

    pub fn state(&self) -> FormulaState {
        FormulaState {
            tokens: self.tokens.clone(),
            selection: self.selection,
            extern_cursor: self.extern_cursor,
        }
    }

    pub fn restore_state(&mut self, state: FormulaState, resolver: &dyn DisplayResolver) {
        self.tokens = state.tokens;
        self.selection = state.selection;
        self.extern_cursor = state.extern_cursor;
        self.generate_extern_formula(resolver);
    }

    #[doc(hidden)]
    pub fn inject_selection(&mut self, selection: Option<TokenSelection>) {
        self.selection = selection;
    }

    /// Moves the extern cursor without re-resolving its token.
    #[doc(hidden)]
    pub fn inject_extern_cursor_position(&mut self, offset: usize) {
        self.extern_cursor = offset;
    }
}
