use serde::{Deserialize, Serialize};

use crate::token::{InternToken, TokenKind};

/// Functions the editor knows how to insert.
///
/// Function identifiers are stored in [`TokenKind::FunctionName`] tokens in their canonical form
/// (see [`Function::name`]) and only translated to display text when the formula is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Rand,
    Round,
    Abs,
    Mod,
    Arcsin,
    Arccos,
    Arctan,
    Exp,
    Max,
    Min,
}

impl Function {
    pub const ALL: [Function; 16] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Ln,
        Function::Log,
        Function::Sqrt,
        Function::Rand,
        Function::Round,
        Function::Abs,
        Function::Mod,
        Function::Arcsin,
        Function::Arccos,
        Function::Arctan,
        Function::Exp,
        Function::Max,
        Function::Min,
    ];

    /// Canonical identifier stored in the intern representation.
    pub const fn name(self) -> &'static str {
        match self {
            Function::Sin => "SIN",
            Function::Cos => "COS",
            Function::Tan => "TAN",
            Function::Ln => "LN",
            Function::Log => "LOG",
            Function::Sqrt => "SQRT",
            Function::Rand => "RAND",
            Function::Round => "ROUND",
            Function::Abs => "ABS",
            Function::Mod => "MOD",
            Function::Arcsin => "ARCSIN",
            Function::Arccos => "ARCCOS",
            Function::Arctan => "ARCTAN",
            Function::Exp => "EXP",
            Function::Max => "MAX",
            Function::Min => "MIN",
        }
    }

    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Literal values filled into the parameter slots when the function is typed on the keyboard.
    pub const fn default_parameters(self) -> &'static [&'static str] {
        match self {
            Function::Rand | Function::Max | Function::Min => &["0", "1"],
            Function::Mod => &["1", "1"],
            Function::Exp => &["1"],
            _ => &["0"],
        }
    }

    pub const fn parameter_count(self) -> usize {
        self.default_parameters().len()
    }

    /// The full call as inserted from the keyboard, e.g. `RAND ( 0 , 1 )`.
    pub fn default_tokens(self) -> Vec<InternToken> {
        let params = self.default_parameters();
        let mut tokens = Vec::with_capacity(2 + params.len() * 2);
        tokens.push(InternToken::function_name(self));
        tokens.push(InternToken::bare(TokenKind::FunctionParametersBracketOpen));
        for (idx, literal) in params.iter().enumerate() {
            if idx > 0 {
                tokens.push(InternToken::bare(TokenKind::FunctionParameterDelimiter));
            }
            tokens.push(InternToken::number(*literal));
        }
        tokens.push(InternToken::bare(TokenKind::FunctionParametersBracketClose));
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip_case_insensitively() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
            assert_eq!(
                Function::from_name(&function.name().to_ascii_lowercase()),
                Some(function)
            );
        }
        assert_eq!(Function::from_name("SUMME"), None);
    }

    #[test]
    fn rand_inserts_two_parameters() {
        assert_eq!(Function::Rand.parameter_count(), 2);

        let kinds: Vec<TokenKind> = Function::Rand
            .default_tokens()
            .iter()
            .map(InternToken::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::FunctionName,
                TokenKind::FunctionParametersBracketOpen,
                TokenKind::Number,
                TokenKind::FunctionParameterDelimiter,
                TokenKind::Number,
                TokenKind::FunctionParametersBracketClose,
            ]
        );
    }
}
