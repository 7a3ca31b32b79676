use serde::{Deserialize, Serialize};

/// Operators that can appear in [`crate::TokenKind::Operator`] tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Plus,
    Minus,
    Mult,
    Divide,
    Pow,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    SmallerThan,
    SmallerOrEqual,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
}

impl Operator {
    pub const ALL: [Operator; 14] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Mult,
        Operator::Divide,
        Operator::Pow,
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::SmallerThan,
        Operator::SmallerOrEqual,
        Operator::LogicalAnd,
        Operator::LogicalOr,
        Operator::LogicalNot,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Operator::Plus => "PLUS",
            Operator::Minus => "MINUS",
            Operator::Mult => "MULT",
            Operator::Divide => "DIVIDE",
            Operator::Pow => "POW",
            Operator::Equal => "EQUAL",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::GreaterOrEqual => "GREATER_OR_EQUAL",
            Operator::SmallerThan => "SMALLER_THAN",
            Operator::SmallerOrEqual => "SMALLER_OR_EQUAL",
            Operator::LogicalAnd => "LOGICAL_AND",
            Operator::LogicalOr => "LOGICAL_OR",
            Operator::LogicalNot => "LOGICAL_NOT",
        }
    }

    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}
