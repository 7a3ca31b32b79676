//! Structural queries over a token sequence: matching brackets, function-call extents and
//! parameter lists.
//!
//! Every lookup is total: a malformed sequence (missing counterpart bracket, parameter bracket
//! without a function name, ...) yields `None` rather than a partial answer.

use crate::token::{InternToken, TokenKind};

/// Inclusive range of intern token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// The call started by the function name at `name_index`: name through closing bracket.
pub fn function_from_name(tokens: &[InternToken], name_index: usize) -> Option<TokenRange> {
    if tokens.get(name_index)?.kind() != TokenKind::FunctionName {
        return None;
    }
    let open = name_index + 1;
    if tokens.get(open)?.kind() != TokenKind::FunctionParametersBracketOpen {
        return None;
    }
    let close = matching_close(
        tokens,
        open,
        TokenKind::FunctionParametersBracketOpen,
        TokenKind::FunctionParametersBracketClose,
    )?;
    Some(TokenRange::new(name_index, close))
}

pub fn function_from_bracket_open(tokens: &[InternToken], open_index: usize) -> Option<TokenRange> {
    if tokens.get(open_index)?.kind() != TokenKind::FunctionParametersBracketOpen {
        return None;
    }
    function_from_name(tokens, open_index.checked_sub(1)?)
}

pub fn function_from_bracket_close(
    tokens: &[InternToken],
    close_index: usize,
) -> Option<TokenRange> {
    if tokens.get(close_index)?.kind() != TokenKind::FunctionParametersBracketClose {
        return None;
    }
    let open = matching_open(
        tokens,
        close_index,
        TokenKind::FunctionParametersBracketOpen,
        TokenKind::FunctionParametersBracketClose,
    )?;
    let range = function_from_bracket_open(tokens, open)?;
    (range.end == close_index).then_some(range)
}

/// The call whose parameter list contains the delimiter at `delimiter_index`.
pub fn function_from_delimiter(
    tokens: &[InternToken],
    delimiter_index: usize,
) -> Option<TokenRange> {
    if tokens.get(delimiter_index)?.kind() != TokenKind::FunctionParameterDelimiter {
        return None;
    }
    let mut depth = 0usize;
    for idx in (0..delimiter_index).rev() {
        match tokens[idx].kind() {
            TokenKind::FunctionParametersBracketClose => depth += 1,
            TokenKind::FunctionParametersBracketOpen if depth == 0 => {
                let range = function_from_bracket_open(tokens, idx)?;
                return range.contains(delimiter_index).then_some(range);
            }
            TokenKind::FunctionParametersBracketOpen => depth -= 1,
            _ => {}
        }
    }
    None
}

pub fn bracket_group_from_open(tokens: &[InternToken], open_index: usize) -> Option<TokenRange> {
    if tokens.get(open_index)?.kind() != TokenKind::BracketOpen {
        return None;
    }
    let close = matching_close(
        tokens,
        open_index,
        TokenKind::BracketOpen,
        TokenKind::BracketClose,
    )?;
    Some(TokenRange::new(open_index, close))
}

pub fn bracket_group_from_close(tokens: &[InternToken], close_index: usize) -> Option<TokenRange> {
    if tokens.get(close_index)?.kind() != TokenKind::BracketClose {
        return None;
    }
    let open = matching_open(
        tokens,
        close_index,
        TokenKind::BracketOpen,
        TokenKind::BracketClose,
    )?;
    Some(TokenRange::new(open, close_index))
}

/// The group a double-activation on `index` selects: a whole call for any part of a function's
/// frame, a whole bracket group for either bracket, the token itself otherwise.
pub fn group_at(tokens: &[InternToken], index: usize) -> Option<TokenRange> {
    match tokens.get(index)?.kind() {
        TokenKind::FunctionName => function_from_name(tokens, index),
        TokenKind::FunctionParametersBracketOpen => function_from_bracket_open(tokens, index),
        TokenKind::FunctionParametersBracketClose => function_from_bracket_close(tokens, index),
        TokenKind::FunctionParameterDelimiter => function_from_delimiter(tokens, index),
        TokenKind::BracketOpen => bracket_group_from_open(tokens, index),
        TokenKind::BracketClose => bracket_group_from_close(tokens, index),
        TokenKind::Number | TokenKind::Operator | TokenKind::UserVariable => {
            Some(TokenRange::new(index, index))
        }
    }
}

/// `true` when `tokens` is exactly one complete function call.
pub fn is_function(tokens: &[InternToken]) -> bool {
    function_from_name(tokens, 0).is_some_and(|range| range.end + 1 == tokens.len())
}

/// Ranges of each parameter of the call `tokens` (which must be a single call, see
/// [`is_function`]), relative to `tokens`. Empty parameters are returned as `None`.
pub fn function_parameters(tokens: &[InternToken]) -> Option<Vec<Option<TokenRange>>> {
    if !is_function(tokens) {
        return None;
    }
    let close = tokens.len() - 1;
    let mut params = Vec::new();
    let mut start = 2;
    let mut fn_depth = 0usize;
    let mut group_depth = 0usize;
    for idx in 2..close {
        match tokens[idx].kind() {
            TokenKind::FunctionParametersBracketOpen => fn_depth += 1,
            TokenKind::FunctionParametersBracketClose => fn_depth = fn_depth.saturating_sub(1),
            TokenKind::BracketOpen => group_depth += 1,
            TokenKind::BracketClose => group_depth = group_depth.saturating_sub(1),
            TokenKind::FunctionParameterDelimiter if fn_depth == 0 && group_depth == 0 => {
                params.push(non_empty_range(start, idx));
                start = idx + 1;
            }
            _ => {}
        }
    }
    // `name ( )` has no parameters at all, not one empty one.
    if start < close || !params.is_empty() {
        params.push(non_empty_range(start, close));
    }
    Some(params)
}

fn non_empty_range(start: usize, end_exclusive: usize) -> Option<TokenRange> {
    (start < end_exclusive).then(|| TokenRange::new(start, end_exclusive - 1))
}

/// Build the call `replacement` but keep the parameters of `original`.
///
/// Parameters are taken over by position. Slots the original doesn't fill (or leaves empty) keep
/// the replacement's own defaults, surplus original parameters are dropped. When either side is
/// not a single function call, `replacement` is returned as is.
pub fn replace_function_keeping_parameters(
    original: &[InternToken],
    replacement: &[InternToken],
) -> Vec<InternToken> {
    let (Some(kept), Some(defaults)) = (
        function_parameters(original),
        function_parameters(replacement),
    ) else {
        return replacement.to_vec();
    };

    let mut out = Vec::with_capacity(replacement.len() + original.len());
    out.extend_from_slice(&replacement[..2]);
    for (idx, default) in defaults.iter().enumerate() {
        if idx > 0 {
            out.push(InternToken::bare(TokenKind::FunctionParameterDelimiter));
        }
        match kept.get(idx).copied().flatten() {
            Some(range) => out.extend_from_slice(&original[range.start..=range.end]),
            None => {
                if let Some(range) = default {
                    out.extend_from_slice(&replacement[range.start..=range.end]);
                }
            }
        }
    }
    out.push(InternToken::bare(TokenKind::FunctionParametersBracketClose));
    out
}

/// Absolute range of the first parameter of the call starting at `name_index`.
pub fn first_parameter(tokens: &[InternToken], name_index: usize) -> Option<TokenRange> {
    let call = function_from_name(tokens, name_index)?;
    let params = function_parameters(&tokens[call.start..=call.end])?;
    let first = params.first().copied().flatten()?;
    Some(TokenRange::new(
        name_index + first.start,
        name_index + first.end,
    ))
}

/// Brackets pair within their own family and the two families never interleave.
pub fn is_well_nested(tokens: &[InternToken]) -> bool {
    let mut stack = Vec::new();
    for token in tokens {
        match token.kind() {
            TokenKind::FunctionParametersBracketOpen | TokenKind::BracketOpen => {
                stack.push(token.kind());
            }
            TokenKind::FunctionParametersBracketClose => {
                if stack.pop() != Some(TokenKind::FunctionParametersBracketOpen) {
                    return false;
                }
            }
            TokenKind::BracketClose => {
                if stack.pop() != Some(TokenKind::BracketOpen) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Well-nested, and every function name is directly followed by its parameter bracket while every
/// parameter bracket opens right after a function name.
pub fn is_well_formed(tokens: &[InternToken]) -> bool {
    if !is_well_nested(tokens) {
        return false;
    }
    tokens.iter().enumerate().all(|(idx, token)| match token.kind() {
        TokenKind::FunctionName => tokens
            .get(idx + 1)
            .is_some_and(|next| next.kind() == TokenKind::FunctionParametersBracketOpen),
        TokenKind::FunctionParametersBracketOpen => idx
            .checked_sub(1)
            .is_some_and(|previous| tokens[previous].is_function_name()),
        _ => true,
    })
}

fn matching_close(
    tokens: &[InternToken],
    open_index: usize,
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open_index) {
        if token.kind() == open {
            depth += 1;
        } else if token.kind() == close {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

fn matching_open(
    tokens: &[InternToken],
    close_index: usize,
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    let mut depth = 0usize;
    for idx in (0..=close_index).rev() {
        let kind = tokens[idx].kind();
        if kind == close {
            depth += 1;
        } else if kind == open {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}
