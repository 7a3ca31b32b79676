//! Display text for the identifiers stored in intern tokens.
//!
//! The engine never owns locale state: rendering asks a [`DisplayResolver`] for the text of each
//! function, operator, bracket, delimiter and the decimal mark. Hosts can pass a closure or one
//! of the built-in [`FormulaLocale`] tables.

mod registry;

use std::borrow::Cow;

use crate::function::Function;
use crate::operator::Operator;

pub use registry::{get_locale, FormulaLocale, DE_DE, EN_US};

/// Identifier whose display text is looked up at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKey {
    Function(Function),
    Operator(Operator),
    /// Used for both plain and function-parameter opening brackets.
    BracketOpen,
    BracketClose,
    ParameterDelimiter,
    DecimalMark,
}

impl DisplayKey {
    /// Key used in the locale tables, e.g. `SIN`, `PLUS`, `DECIMAL_MARK`.
    pub const fn canonical_id(self) -> &'static str {
        match self {
            DisplayKey::Function(function) => function.name(),
            DisplayKey::Operator(op) => op.name(),
            DisplayKey::BracketOpen => "BRACKET_OPEN",
            DisplayKey::BracketClose => "BRACKET_CLOSE",
            DisplayKey::ParameterDelimiter => "PARAMETER_DELIMITER",
            DisplayKey::DecimalMark => "DECIMAL_MARK",
        }
    }
}

/// Maps identifiers to localized display text.
///
/// Implementations must be pure: the same key always resolves to the same text for the lifetime
/// of a render.
pub trait DisplayResolver {
    fn resolve(&self, key: DisplayKey) -> Cow<'_, str>;
}

impl<F> DisplayResolver for F
where
    F: Fn(DisplayKey) -> String,
{
    fn resolve(&self, key: DisplayKey) -> Cow<'_, str> {
        Cow::Owned(self(key))
    }
}

impl DisplayResolver for FormulaLocale {
    fn resolve(&self, key: DisplayKey) -> Cow<'_, str> {
        Cow::Borrowed(self.display_text(key.canonical_id()))
    }
}

fn normalize_locale_id(id: &str) -> Option<&'static str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Treat `-` and `_` as equivalent and match case-insensitively.
    let mut key: String = trimmed
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    // POSIX tags like `de_DE.UTF-8` or `de_DE@euro`.
    if let Some(idx) = key.find(['.', '@']) {
        key.truncate(idx);
    }

    match key.as_str() {
        "en-us" | "en" => Some("en-US"),
        "de-de" | "de" => Some("de-DE"),
        _ => match key.split('-').next().unwrap_or("") {
            "en" => Some("en-US"),
            "de" => Some("de-DE"),
            _ => None,
        },
    }
}
