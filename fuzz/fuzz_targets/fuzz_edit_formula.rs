#![no_main]

use formula_editor::{
    is_well_formed, Activation, EditKey, Function, InternFormula, Operator, DE_DE, EN_US,
};
use libfuzzer_sys::fuzz_target;

/// Keep the harness bounded: every byte pair is one action.
const MAX_ACTIONS: usize = 512;

fn key_for(selector: u8, arg: u8) -> EditKey {
    match selector % 8 {
        0 | 1 => EditKey::Digit(arg % 10),
        2 => EditKey::DecimalMark,
        3 => EditKey::Operator(Operator::ALL[usize::from(arg) % Operator::ALL.len()]),
        4 => EditKey::Function(Function::ALL[usize::from(arg) % Function::ALL.len()]),
        5 => EditKey::Brackets,
        6 => EditKey::UserVariable(format!("v{}", arg % 4)),
        _ => EditKey::Delete,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let locale = if first & 1 == 0 { &EN_US } else { &DE_DE };
    let mut formula = InternFormula::new(Vec::new());
    formula.generate_extern_formula(locale);

    for pair in rest.chunks_exact(2).take(MAX_ACTIONS) {
        let (selector, arg) = (pair[0], pair[1]);
        if selector >= 0xF0 {
            if selector == 0xFF {
                formula.select_parse_error_token(usize::from(arg));
                continue;
            }
            let activation = if selector & 1 == 0 {
                Activation::Single
            } else {
                Activation::Double
            };
            formula.set_cursor_and_selection(usize::from(arg), activation);
        } else {
            formula.handle_key_input(key_for(selector, arg), locale);
        }

        assert!(is_well_formed(formula.tokens()));
        assert!(formula.extern_cursor_position() <= formula.extern_formula_string().chars().count());
    }
});
