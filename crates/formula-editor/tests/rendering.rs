use formula_editor::{
    render, Function, InternFormula, InternToken, Operator, TokenKind, DE_DE, EN_US,
};
use pretty_assertions::assert_eq;

fn call(function: Function, args: Vec<InternToken>) -> Vec<InternToken> {
    let mut tokens = vec![
        InternToken::function_name(function),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
    ];
    tokens.extend(args);
    tokens.push(InternToken::bare(TokenKind::FunctionParametersBracketClose));
    tokens
}

#[test]
fn nested_calls_render_with_interior_spacing() {
    let tokens = call(
        Function::Cos,
        call(
            Function::Round,
            call(Function::Sin, vec![InternToken::number("42.42")]),
        ),
    );
    let rendered = render(&tokens, &EN_US);
    assert_eq!(rendered.text, "cos( round( sin( 42.42 ) ) ) ");
    assert_eq!(rendered.mapping.token_count(), 10);
    assert_eq!(rendered.mapping.extern_span(6), Some(17..22));
    assert_eq!(rendered.mapping.intern_index_at(3), Some(1));
    assert_eq!(rendered.mapping.intern_index_at(4), None);
}

#[test]
fn log_renders_glued_to_its_bracket() {
    let tokens = call(Function::Log, vec![InternToken::number("42")]);
    assert_eq!(render(&tokens, &EN_US).text, "log( 42 ) ");
}

#[test]
fn german_display_text() {
    let mut tokens = call(Function::Sqrt, vec![InternToken::number("2.5")]);
    tokens.push(InternToken::operator(Operator::LogicalOr));
    tokens.push(InternToken::operator(Operator::LogicalNot));
    tokens.extend(call(
        Function::Mod,
        vec![
            InternToken::number("7"),
            InternToken::bare(TokenKind::FunctionParameterDelimiter),
            InternToken::number("2"),
        ],
    ));

    assert_eq!(
        render(&tokens, &DE_DE).text,
        "wurzel( 2,5 ) oder nicht mod( 7 ; 2 ) "
    );
    assert_eq!(
        render(&tokens, &EN_US).text,
        "sqrt( 2.5 ) or not mod( 7 , 2 ) "
    );
}

#[test]
fn rendering_is_deterministic() {
    let tokens = call(
        Function::Max,
        vec![
            InternToken::number("1"),
            InternToken::bare(TokenKind::FunctionParameterDelimiter),
            InternToken::bare(TokenKind::BracketOpen),
            InternToken::number("2"),
            InternToken::operator(Operator::Pow),
            InternToken::user_variable("x"),
            InternToken::bare(TokenKind::BracketClose),
        ],
    );
    assert_eq!(render(&tokens, &EN_US), render(&tokens, &EN_US));

    let mut formula = InternFormula::new(tokens.clone());
    formula.generate_extern_formula(&EN_US);
    let first = formula.extern_formula_string().to_string();
    formula.generate_extern_formula(&EN_US);
    assert_eq!(formula.extern_formula_string(), first);
    assert_eq!(first, "max( 1 , ( 2 ^ \"x\" ) ) ");
    assert_eq!(formula.mapping(), &render(&tokens, &EN_US).mapping);
}

#[test]
fn tokens_serialize_with_canonical_identifiers() {
    let tokens = call(Function::Abs, vec![InternToken::number("-1")]);
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"FUNCTION_NAME","value":"ABS"},{"kind":"FUNCTION_PARAMETERS_BRACKET_OPEN"},{"kind":"NUMBER","value":"-1"},{"kind":"FUNCTION_PARAMETERS_BRACKET_CLOSE"}]"#
    );
}
