//! Extern (display) rendering of a token sequence.

use crate::locale::{DisplayKey, DisplayResolver};
use crate::mapping::ExternInternMapping;
use crate::token::{InternToken, TokenKind};

/// Display text plus the mapping that ties every char of it back to its token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFormula {
    pub text: String,
    pub mapping: ExternInternMapping,
}

/// Render `tokens` for display.
///
/// Every token is followed by a single space, except a function name that is directly followed
/// by its parameter bracket: `COS(ROUND(SIN(42.42)))` renders as `cos( round( sin( 42.42 ) ) ) `.
/// An empty formula renders as the empty string.
pub fn render(tokens: &[InternToken], resolver: &dyn DisplayResolver) -> RenderedFormula {
    let decimal_mark = resolver
        .resolve(DisplayKey::DecimalMark)
        .chars()
        .next()
        .unwrap_or('.');

    let mut text = String::new();
    let mut mapping = ExternInternMapping::default();
    let mut pos = 0usize;

    for (idx, token) in tokens.iter().enumerate() {
        let display = display_text(token, resolver, decimal_mark);
        let len = display.chars().count();
        text.push_str(&display);
        mapping.push_token(idx, pos..pos + len);
        pos += len;

        let glued_to_bracket = token.kind() == TokenKind::FunctionName
            && tokens
                .get(idx + 1)
                .is_some_and(|next| next.kind() == TokenKind::FunctionParametersBracketOpen);
        if !glued_to_bracket {
            text.push(' ');
            pos += 1;
        }
    }

    mapping.extend_to(pos);
    RenderedFormula { text, mapping }
}

fn display_text(token: &InternToken, resolver: &dyn DisplayResolver, decimal_mark: char) -> String {
    let key = match token.kind() {
        TokenKind::Number => {
            return token
                .value()
                .chars()
                .map(|ch| if ch == '.' { decimal_mark } else { ch })
                .collect();
        }
        TokenKind::UserVariable => return format!("\"{}\"", token.value()),
        TokenKind::Operator => token.operator_kind().map(DisplayKey::Operator),
        TokenKind::FunctionName => token.function().map(DisplayKey::Function),
        TokenKind::FunctionParametersBracketOpen | TokenKind::BracketOpen => {
            Some(DisplayKey::BracketOpen)
        }
        TokenKind::FunctionParametersBracketClose | TokenKind::BracketClose => {
            Some(DisplayKey::BracketClose)
        }
        TokenKind::FunctionParameterDelimiter => Some(DisplayKey::ParameterDelimiter),
    };

    match key {
        Some(key) => resolver.resolve(key).into_owned(),
        // Unknown identifiers (e.g. from a newer document) render verbatim.
        None => token.value().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::locale::{DE_DE, EN_US};
    use crate::operator::Operator;
    use pretty_assertions::assert_eq;

    #[test]
    fn separators_follow_every_token_but_function_names() {
        let mut tokens = Function::Log.default_tokens();
        tokens.push(InternToken::operator(Operator::Plus));
        tokens.push(InternToken::user_variable("speed"));

        let rendered = render(&tokens, &EN_US);
        assert_eq!(rendered.text, "log( 0 ) + \"speed\" ");
        assert_eq!(rendered.mapping.extern_span(0), Some(0..3));
        assert_eq!(rendered.mapping.extern_span(1), Some(3..4));
        assert_eq!(rendered.mapping.extern_span(5), Some(11..18));
        assert_eq!(rendered.mapping.extern_len(), 19);
    }

    #[test]
    fn numbers_use_the_locale_decimal_mark() {
        let mut tokens = Function::Rand.default_tokens();
        tokens[2] = InternToken::number("42.42");
        assert_eq!(render(&tokens, &DE_DE).text, "zufall( 42,42 ; 1 ) ");
    }

    #[test]
    fn unknown_identifiers_render_verbatim() {
        let tokens = vec![
            InternToken::new(TokenKind::FunctionName, "SUMME"),
            InternToken::bare(TokenKind::FunctionParametersBracketOpen),
            InternToken::bare(TokenKind::FunctionParametersBracketClose),
        ];
        assert_eq!(render(&tokens, &EN_US).text, "SUMME( ) ");
    }

    #[test]
    fn empty_formula_renders_empty() {
        let rendered = render(&[], &EN_US);
        assert_eq!(rendered.text, "");
        assert!(rendered.mapping.is_empty());
    }
}
