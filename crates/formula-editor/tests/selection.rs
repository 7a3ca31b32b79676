use formula_editor::{
    Activation, EditKey, Function, InternFormula, InternToken, SelectionKind, TokenKind,
    TokenSelection, EN_US,
};
use pretty_assertions::assert_eq;

fn rendered(tokens: Vec<InternToken>) -> InternFormula {
    let mut formula = InternFormula::new(tokens);
    formula.generate_extern_formula(&EN_US);
    formula
}

fn selection_at(formula: &mut InternFormula, offset: usize) -> Option<(usize, usize)> {
    formula.set_cursor_and_selection(offset, Activation::Double);
    formula
        .selection()
        .map(|selection| (selection.start_index(), selection.end_index()))
}

fn bracketed_cos() -> Vec<InternToken> {
    vec![
        InternToken::bare(TokenKind::BracketOpen),
        InternToken::function_name(Function::Cos),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::number("42.42"),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
        InternToken::bare(TokenKind::BracketClose),
    ]
}

fn rand_call() -> Vec<InternToken> {
    vec![
        InternToken::function_name(Function::Rand),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::number("42.42"),
        InternToken::bare(TokenKind::FunctionParameterDelimiter),
        InternToken::number("42.42"),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
    ]
}

fn nested_cos() -> Vec<InternToken> {
    vec![
        InternToken::function_name(Function::Cos),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::function_name(Function::Round),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::function_name(Function::Sin),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::number("42.42"),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
    ]
}

#[test]
fn bracket_group_selection_from_the_right() {
    let mut formula = rendered(bracketed_cos());
    assert_eq!(formula.extern_formula_string(), "( cos( 42.42 ) ) ");
    let len = formula.extern_formula_string().chars().count();

    for offset in [len, len - 1, len - 2] {
        assert_eq!(selection_at(&mut formula, offset), Some((0, 5)), "offset {offset}");
    }
    assert_eq!(selection_at(&mut formula, len - 3), Some((1, 4)));
}

#[test]
fn bracket_group_selection_from_the_left() {
    let mut formula = rendered(bracketed_cos());
    assert_eq!(selection_at(&mut formula, 0), Some((0, 5)));
    assert_eq!(selection_at(&mut formula, 1), Some((0, 5)));
    assert_eq!(selection_at(&mut formula, 2), Some((1, 4)));
}

#[test]
fn function_frame_selects_the_whole_call() {
    let mut formula = rendered(rand_call());
    assert_eq!(formula.extern_formula_string(), "rand( 42.42 , 42.42 ) ");

    for offset in [22, 21, 20, 0, 4, 5, 12, 13] {
        assert_eq!(selection_at(&mut formula, offset), Some((0, 5)), "offset {offset}");
    }
    for offset in [19, 14] {
        assert_eq!(selection_at(&mut formula, offset), Some((4, 4)), "offset {offset}");
    }
}

#[test]
fn single_activation_never_selects() {
    let mut formula = rendered(rand_call());
    for offset in [0, 4, 12, 22] {
        formula.set_cursor_and_selection(offset, Activation::Double);
        formula.set_cursor_and_selection(offset, Activation::Single);
        assert_eq!(formula.selection(), None, "offset {offset}");
    }
}

#[test]
fn nested_call_is_selected_from_its_end() {
    let mut formula = rendered(nested_cos());
    assert_eq!(formula.extern_formula_string(), "cos( round( sin( 42.42 ) ) ) ");
    assert_eq!(selection_at(&mut formula, 29), Some((0, 9)));
    assert_eq!(formula.extern_selection_range(), Some(0..28));
}

#[test]
fn unmatched_brackets_produce_no_selection() {
    let mut formula = rendered(vec![
        InternToken::bare(TokenKind::BracketOpen),
        InternToken::number("42"),
    ]);
    assert_eq!(selection_at(&mut formula, 0), None);
    assert_eq!(selection_at(&mut formula, 2), Some((1, 1)));

    let mut orphan = rendered(vec![
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::number("42"),
        InternToken::bare(TokenKind::FunctionParametersBracketClose),
    ]);
    assert_eq!(selection_at(&mut orphan, 0), None);
    assert_eq!(selection_at(&mut orphan, 6), None);
}

#[test]
fn unclosed_call_produces_no_selection() {
    let mut formula = rendered(vec![
        InternToken::function_name(Function::Sin),
        InternToken::bare(TokenKind::FunctionParametersBracketOpen),
        InternToken::number("42.42"),
    ]);
    assert_eq!(formula.extern_formula_string(), "sin( 42.42 ");
    assert_eq!(selection_at(&mut formula, 1), None);
    assert_eq!(selection_at(&mut formula, 3), None);
    assert_eq!(selection_at(&mut formula, 6), Some((2, 2)));
}

#[test]
fn offsets_past_the_end_are_clamped() {
    let mut formula = rendered(rand_call());
    formula.set_cursor_and_selection(500, Activation::Single);
    assert_eq!(formula.extern_cursor_position(), 22);
}

#[test]
fn replacing_a_selected_call_by_a_function_keeps_its_arguments() {
    let mut formula = rendered(nested_cos());
    selection_at(&mut formula, 29);

    formula.handle_key_input(EditKey::Function(Function::Rand), &EN_US);
    assert_eq!(
        formula.extern_formula_string(),
        "rand( round( sin( 42.42 ) ) , 1 ) "
    );
    assert_eq!(
        formula.selection().map(|s| (s.start_index(), s.end_index())),
        Some((2, 8))
    );

    let len = formula.extern_formula_string().chars().count();
    assert_eq!(selection_at(&mut formula, len), Some((0, 11)));

    formula.handle_key_input(EditKey::Function(Function::Sqrt), &EN_US);
    assert_eq!(
        formula.extern_formula_string(),
        "sqrt( round( sin( 42.42 ) ) ) "
    );
    assert_eq!(
        formula.selection().map(|s| (s.start_index(), s.end_index())),
        Some((2, 8))
    );

    let len = formula.extern_formula_string().chars().count();
    assert_eq!(selection_at(&mut formula, len), Some((0, 9)));
}

#[test]
fn replacing_a_selected_call_by_digits_collapses_it() {
    let mut formula = rendered(nested_cos());
    selection_at(&mut formula, 29);

    formula.handle_key_input(EditKey::Digit(4), &EN_US);
    formula.handle_key_input(EditKey::Digit(2), &EN_US);
    assert_eq!(formula.extern_formula_string(), "42 ");
    assert_eq!(formula.tokens(), &[InternToken::number("42")]);
    assert_eq!(formula.selection(), None);

    let len = formula.extern_formula_string().chars().count();
    assert_eq!(selection_at(&mut formula, len), Some((0, 0)));
}

#[test]
fn whole_formula_and_parse_error_selections() {
    let mut formula = rendered(rand_call());
    formula.select_whole_formula();
    assert_eq!(
        formula.selection(),
        Some(&TokenSelection::new(SelectionKind::User, 0, 5))
    );
    assert_eq!(formula.selected_tokens().map(<[_]>::len), Some(6));

    assert!(formula.select_parse_error_token(2));
    assert_eq!(
        formula.selection(),
        Some(&TokenSelection::new(SelectionKind::ParserError, 2, 2))
    );
    assert_eq!(formula.extern_cursor_position(), 11);
    assert_eq!(formula.extern_selection_range(), Some(6..11));

    assert!(!formula.select_parse_error_token(6));
}
