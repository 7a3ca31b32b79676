use serde::{Deserialize, Serialize};

use crate::function::Function;
use crate::operator::Operator;

/// Kind of an intern token.
///
/// Function-parameter brackets and plain (grouping) brackets are distinct kinds: they only ever
/// pair with brackets of their own family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,
    Operator,
    FunctionName,
    FunctionParametersBracketOpen,
    FunctionParametersBracketClose,
    FunctionParameterDelimiter,
    BracketOpen,
    BracketClose,
    UserVariable,
}

impl TokenKind {
    /// Any bracket, of either family.
    pub fn is_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::FunctionParametersBracketOpen
                | TokenKind::FunctionParametersBracketClose
                | TokenKind::BracketOpen
                | TokenKind::BracketClose
        )
    }

    /// Tokens that only exist to give a formula its shape. They can't be deleted on their own.
    pub fn is_structural(self) -> bool {
        self.is_bracket() || self == TokenKind::FunctionParameterDelimiter
    }
}

/// One element of the intern representation.
///
/// `value` is the literal text for numbers, the identifier for operators and functions, and the
/// name for user variables. Brackets and delimiters carry no meaningful value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternToken {
    kind: TokenKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    value: String,
}

impl InternToken {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// A token whose value is irrelevant (brackets, delimiters).
    pub fn bare(kind: TokenKind) -> Self {
        Self::new(kind, String::new())
    }

    pub fn number(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, literal)
    }

    pub fn operator(op: Operator) -> Self {
        Self::new(TokenKind::Operator, op.name())
    }

    pub fn function_name(function: Function) -> Self {
        Self::new(TokenKind::FunctionName, function.name())
    }

    pub fn user_variable(name: impl Into<String>) -> Self {
        Self::new(TokenKind::UserVariable, name)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_function_name(&self) -> bool {
        self.kind == TokenKind::FunctionName
    }

    /// The function this token names, if it is a function-name token with a known identifier.
    pub fn function(&self) -> Option<Function> {
        if self.is_function_name() {
            Function::from_name(&self.value)
        } else {
            None
        }
    }

    /// The operator this token names, if it is an operator token with a known identifier.
    pub fn operator_kind(&self) -> Option<Operator> {
        if self.kind == TokenKind::Operator {
            Operator::from_name(&self.value)
        } else {
            None
        }
    }

    pub fn has_decimal_mark(&self) -> bool {
        self.is_number() && self.value.contains('.')
    }

    pub(crate) fn append_to_value(&mut self, text: &str) {
        self.value.push_str(text);
    }

    pub(crate) fn prepend_to_value(&mut self, text: &str) {
        self.value.insert_str(0, text);
    }

    /// Insert `text` before the `char_offset`-th character of the value (clamped to its end).
    pub(crate) fn insert_into_value(&mut self, char_offset: usize, text: &str) {
        let byte = byte_offset(&self.value, char_offset);
        self.value.insert_str(byte, text);
    }

    /// Remove the `char_offset`-th character of the value, if there is one.
    pub(crate) fn remove_char_from_value(&mut self, char_offset: usize) -> Option<char> {
        if char_offset >= self.value.chars().count() {
            return None;
        }
        let byte = byte_offset(&self.value, char_offset);
        Some(self.value.remove(byte))
    }

    /// Split a number literal at `char_offset`, returning the left and right halves.
    pub(crate) fn split_value_at(&self, char_offset: usize) -> (String, String) {
        let byte = byte_offset(&self.value, char_offset);
        let (left, right) = self.value.split_at(byte);
        (left.to_string(), right.to_string())
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(idx, _)| idx)
}
