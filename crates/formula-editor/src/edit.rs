//! Keyboard edits against a rendered formula.
//!
//! An edit never touches the formula it is computed from. It produces a complete replacement token
//! sequence plus where the cursor and selection go afterwards, and the caller commits it once the
//! result passes the structure checks.

use std::ops::Range;

use crate::cursor::{CursorToken, CursorTokenPosition};
use crate::error::EditRejection;
use crate::function::Function;
use crate::keyboard::EditKey;
use crate::mapping::ExternInternMapping;
use crate::selection::TokenSelection;
use crate::structure::{self, TokenRange};
use crate::token::{InternToken, TokenKind};

/// Cursor target after an edit, resolved against the re-rendered formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorPlacement {
    /// Just after the token's last char.
    RightOf(usize),
    /// On the token's first char.
    LeftOf(usize),
    /// An explicit extern offset.
    Extern(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edit {
    pub tokens: Vec<InternToken>,
    pub cursor: CursorPlacement,
    pub selection: Option<TokenSelection>,
}

/// Editor state an edit is computed against.
pub(crate) struct EditContext<'a> {
    pub tokens: &'a [InternToken],
    pub mapping: &'a ExternInternMapping,
    pub extern_cursor: usize,
    pub cursor_token: Option<CursorToken>,
    pub selection: Option<TokenSelection>,
    pub select_first_parameter: bool,
}

impl EditContext<'_> {
    pub fn apply(&self, key: &EditKey) -> Result<Edit, EditRejection> {
        if *key == EditKey::Delete {
            return self.delete();
        }
        if let Some(selection) = self.selection {
            return self.replace_selection(selection, key);
        }

        let Some(cursor) = self.cursor_token else {
            if self.tokens.is_empty() {
                return self.insert_at(0, key);
            }
            return Err(EditRejection::CursorOutOfRange);
        };
        match cursor.position {
            CursorTokenPosition::Left => self.insert_left_of(cursor.index, key),
            CursorTokenPosition::Middle => self.insert_into(cursor.index, key),
            CursorTokenPosition::Right => self.insert_right_of(cursor.index, key),
        }
    }

    fn token(&self, index: usize) -> Result<&InternToken, EditRejection> {
        self.tokens
            .get(index)
            .ok_or(EditRejection::CursorOutOfRange)
    }

    fn splice(&self, range: Range<usize>, with: Vec<InternToken>) -> Vec<InternToken> {
        let mut tokens = self.tokens.to_vec();
        tokens.splice(range, with);
        tokens
    }

    fn replace_selection(
        &self,
        selection: TokenSelection,
        key: &EditKey,
    ) -> Result<Edit, EditRejection> {
        let range = selection
            .range_within(self.tokens.len())
            .ok_or(EditRejection::InvalidSelection)?;
        let selected = &self.tokens[range.start..=range.end];

        match key {
            EditKey::Brackets => {
                let mut wrapped = Vec::with_capacity(selected.len() + 2);
                wrapped.push(InternToken::bare(TokenKind::BracketOpen));
                wrapped.extend_from_slice(selected);
                wrapped.push(InternToken::bare(TokenKind::BracketClose));
                let close = range.start + wrapped.len() - 1;
                Ok(Edit {
                    tokens: self.splice(range.start..range.end + 1, wrapped),
                    cursor: CursorPlacement::RightOf(close),
                    selection: None,
                })
            }
            EditKey::Function(function) if structure::is_function(selected) => {
                Ok(self.replace_call(range, *function))
            }
            _ => {
                let inserted = key.tokens()?;
                let count = inserted.len();
                let tokens = self.splice(range.start..range.end + 1, inserted);
                Ok(self.after_insert(tokens, range.start, count, key))
            }
        }
    }

    /// Swap the function of `call`, keeping its parameters, and select the new first parameter.
    fn replace_call(&self, call: TokenRange, function: Function) -> Edit {
        let replacement = structure::replace_function_keeping_parameters(
            &self.tokens[call.start..=call.end],
            &function.default_tokens(),
        );
        let last = call.start + replacement.len() - 1;
        let tokens = self.splice(call.start..call.end + 1, replacement);
        let selection = structure::first_parameter(&tokens, call.start).map(TokenSelection::user);
        let cursor = match selection {
            Some(selection) => CursorPlacement::RightOf(selection.end_index()),
            None => CursorPlacement::RightOf(last),
        };
        Edit {
            tokens,
            cursor,
            selection,
        }
    }

    fn insert_at(&self, index: usize, key: &EditKey) -> Result<Edit, EditRejection> {
        let inserted = key.tokens()?;
        let count = inserted.len();
        let tokens = self.splice(index..index, inserted);
        Ok(self.after_insert(tokens, index, count, key))
    }

    /// Place the cursor after `count` tokens freshly inserted at `start`.
    fn after_insert(
        &self,
        tokens: Vec<InternToken>,
        start: usize,
        count: usize,
        key: &EditKey,
    ) -> Edit {
        let selection = match key {
            EditKey::Function(_) if self.select_first_parameter => {
                structure::first_parameter(&tokens, start).map(TokenSelection::user)
            }
            _ => None,
        };
        let cursor = match (selection, key) {
            (Some(selection), _) => CursorPlacement::RightOf(selection.end_index()),
            // Between the brackets of a new empty pair.
            (None, EditKey::Brackets) => CursorPlacement::LeftOf(start + 1),
            (None, _) => CursorPlacement::RightOf((start + count).saturating_sub(1)),
        };
        Edit {
            tokens,
            cursor,
            selection,
        }
    }

    fn insert_left_of(&self, index: usize, key: &EditKey) -> Result<Edit, EditRejection> {
        let token = self.token(index)?;

        if let Some(ch) = key.number_char()? {
            if token.is_number() {
                return self.prepend_to_number(index, ch);
            }
            if let Some(previous) = index
                .checked_sub(1)
                .filter(|&previous| self.tokens[previous].is_number())
            {
                return self.append_to_number(previous, ch);
            }
        }

        // Between a function name and its parameter bracket only the function itself can change.
        if token.kind() == TokenKind::FunctionParametersBracketOpen
            && index > 0
            && self.tokens[index - 1].is_function_name()
        {
            return match key {
                EditKey::Function(function) => {
                    let call = structure::function_from_name(self.tokens, index - 1)
                        .ok_or(EditRejection::UnresolvedFunction)?;
                    Ok(self.replace_call(call, *function))
                }
                _ => Err(EditRejection::StructureProtected),
            };
        }

        self.insert_at(index, key)
    }

    fn insert_into(&self, index: usize, key: &EditKey) -> Result<Edit, EditRejection> {
        let token = self.token(index)?;

        if token.is_number() {
            let offset = self
                .mapping
                .offset_in_token(self.extern_cursor, index)
                .ok_or(EditRejection::CursorOutOfRange)?;

            if let Some(ch) = key.number_char()? {
                if ch == '.' && token.has_decimal_mark() {
                    return Err(EditRejection::MalformedNumber);
                }
                let mut tokens = self.tokens.to_vec();
                tokens[index].insert_into_value(offset, &ch.to_string());
                return Ok(Edit {
                    tokens,
                    cursor: CursorPlacement::Extern(self.extern_cursor + 1),
                    selection: None,
                });
            }

            // Any other key splits the literal around the inserted tokens.
            let (left, mut right) = token.split_value_at(offset);
            if right.starts_with('.') {
                right.insert(0, '0');
            }
            let inserted = key.tokens()?;
            let count = inserted.len();
            let mut replacement = Vec::with_capacity(count + 2);
            replacement.push(InternToken::number(left));
            replacement.extend(inserted);
            replacement.push(InternToken::number(right));
            let tokens = self.splice(index..index + 1, replacement);
            return Ok(self.after_insert(tokens, index + 1, count, key));
        }

        if token.is_function_name() {
            return match key {
                EditKey::Function(function) => {
                    let call = structure::function_from_name(self.tokens, index)
                        .ok_or(EditRejection::UnresolvedFunction)?;
                    Ok(self.replace_call(call, *function))
                }
                _ => Err(EditRejection::StructureProtected),
            };
        }

        self.insert_right_of(index, key)
    }

    fn insert_right_of(&self, index: usize, key: &EditKey) -> Result<Edit, EditRejection> {
        let token = self.token(index)?;
        if let Some(ch) = key.number_char()? {
            if token.is_number() {
                return self.append_to_number(index, ch);
            }
            if self.tokens.get(index + 1).is_some_and(InternToken::is_number) {
                return self.prepend_to_number(index + 1, ch);
            }
        }
        self.insert_at(index + 1, key)
    }

    /// A decimal mark in front of a literal becomes `0.`.
    fn prepend_to_number(&self, index: usize, ch: char) -> Result<Edit, EditRejection> {
        let prefix = match ch {
            '.' if self.token(index)?.has_decimal_mark() => {
                return Err(EditRejection::MalformedNumber)
            }
            '.' => "0.".to_string(),
            digit => digit.to_string(),
        };
        let start = self
            .mapping
            .extern_start(index)
            .ok_or(EditRejection::CursorOutOfRange)?;
        let mut tokens = self.tokens.to_vec();
        tokens[index].prepend_to_value(&prefix);
        Ok(Edit {
            tokens,
            cursor: CursorPlacement::Extern(start + prefix.chars().count()),
            selection: None,
        })
    }

    fn append_to_number(&self, index: usize, ch: char) -> Result<Edit, EditRejection> {
        if ch == '.' && self.token(index)?.has_decimal_mark() {
            return Err(EditRejection::MalformedNumber);
        }
        let mut tokens = self.tokens.to_vec();
        tokens[index].append_to_value(&ch.to_string());
        Ok(Edit {
            tokens,
            cursor: CursorPlacement::RightOf(index),
            selection: None,
        })
    }

    fn delete(&self) -> Result<Edit, EditRejection> {
        if let Some(selection) = self.selection {
            let range = selection
                .range_within(self.tokens.len())
                .ok_or(EditRejection::InvalidSelection)?;
            return Ok(self.remove(range));
        }

        let cursor = self.cursor_token.ok_or(EditRejection::NothingToDelete)?;
        let target = match cursor.position {
            CursorTokenPosition::Left => cursor
                .index
                .checked_sub(1)
                .ok_or(EditRejection::NothingToDelete)?,
            CursorTokenPosition::Middle | CursorTokenPosition::Right => cursor.index,
        };

        let kind = self.token(target)?.kind();
        if kind.is_structural() {
            return Err(EditRejection::StructureProtected);
        }
        match kind {
            TokenKind::Number => self.delete_from_number(target),
            TokenKind::FunctionName => {
                let call = structure::function_from_name(self.tokens, target)
                    .ok_or(EditRejection::UnresolvedFunction)?;
                Ok(self.remove(call))
            }
            _ => Ok(self.remove(TokenRange::new(target, target))),
        }
    }

    /// Backspace inside a number literal.
    fn delete_from_number(&self, index: usize) -> Result<Edit, EditRejection> {
        let offset = self
            .mapping
            .offset_in_token(self.extern_cursor, index)
            .ok_or(EditRejection::CursorOutOfRange)?;
        let removed_at = offset.checked_sub(1).ok_or(EditRejection::NothingToDelete)?;

        let mut tokens = self.tokens.to_vec();
        tokens[index]
            .remove_char_from_value(removed_at)
            .ok_or(EditRejection::CursorOutOfRange)?;
        if tokens[index].value().is_empty() {
            tokens.remove(index);
            return Ok(Edit {
                tokens,
                cursor: CursorPlacement::LeftOf(index),
                selection: None,
            });
        }

        let start = self
            .mapping
            .extern_start(index)
            .ok_or(EditRejection::CursorOutOfRange)?;
        Ok(Edit {
            tokens,
            cursor: CursorPlacement::Extern(start + removed_at),
            selection: None,
        })
    }

    fn remove(&self, range: TokenRange) -> Edit {
        Edit {
            tokens: self.splice(range.start..range.end + 1, Vec::new()),
            cursor: CursorPlacement::LeftOf(range.start),
            selection: None,
        }
    }
}
