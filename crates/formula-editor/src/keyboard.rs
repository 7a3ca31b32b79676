use serde::{Deserialize, Serialize};

use crate::error::EditRejection;
use crate::function::Function;
use crate::operator::Operator;
use crate::token::{InternToken, TokenKind};

/// A key of the formula keyboard.
///
/// Hosts map their own widget or key identifiers onto this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKey {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    DecimalMark,
    Operator(Operator),
    Function(Function),
    /// A plain `( )` pair, or brackets around the selection.
    Brackets,
    UserVariable(String),
    Delete,
}

impl EditKey {
    /// The char this key adds to a number literal.
    pub(crate) fn number_char(&self) -> Result<Option<char>, EditRejection> {
        match self {
            EditKey::Digit(digit) => char::from_digit(u32::from(*digit), 10)
                .map(Some)
                .ok_or(EditRejection::MalformedNumber),
            EditKey::DecimalMark => Ok(Some('.')),
            _ => Ok(None),
        }
    }

    /// Tokens inserted for this key when it starts a new token.
    ///
    /// A decimal mark on its own becomes `0.`; functions come with their default parameters.
    pub(crate) fn tokens(&self) -> Result<Vec<InternToken>, EditRejection> {
        let tokens = match self {
            EditKey::Digit(_) => match self.number_char()? {
                Some(ch) => vec![InternToken::number(ch.to_string())],
                None => Vec::new(),
            },
            EditKey::DecimalMark => vec![InternToken::number("0.")],
            EditKey::Operator(op) => vec![InternToken::operator(*op)],
            EditKey::Function(function) => function.default_tokens(),
            EditKey::Brackets => vec![
                InternToken::bare(TokenKind::BracketOpen),
                InternToken::bare(TokenKind::BracketClose),
            ],
            EditKey::UserVariable(name) => vec![InternToken::user_variable(name.clone())],
            EditKey::Delete => Vec::new(),
        };
        Ok(tokens)
    }
}
