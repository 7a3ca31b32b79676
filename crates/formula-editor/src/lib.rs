#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Token-based formula editing.
//!
//! A formula is kept in two synchronized forms:
//!
//! - the *intern* representation, an ordered sequence of [`InternToken`]s (numbers, operators,
//!   function names, brackets, parameter delimiters, user variables) that is the source of truth;
//! - the *extern* representation, the display string rendered from the tokens through a
//!   [`DisplayResolver`], together with an [`ExternInternMapping`] from display chars back to
//!   tokens.
//!
//! [`InternFormula`] translates cursor placements and keyboard input on the extern text into
//! edits of the token sequence, then re-renders:
//!
//! ```
//! use formula_editor::{Activation, EditKey, Function, InternFormula, EN_US};
//!
//! let mut formula = InternFormula::new(Vec::new());
//! formula.handle_key_input(EditKey::Function(Function::Sin), &EN_US);
//! formula.handle_key_input(EditKey::Digit(4), &EN_US);
//! formula.handle_key_input(EditKey::Digit(2), &EN_US);
//! assert_eq!(formula.extern_formula_string(), "sin( 42 ) ");
//!
//! // Double activation on the function name selects the whole call.
//! formula.set_cursor_and_selection(0, Activation::Double);
//! let selection = formula.selection().unwrap();
//! assert_eq!((selection.start_index(), selection.end_index()), (0, 3));
//! ```
//!
//! Evaluating formulas is out of scope: the engine only keeps the two views consistent.

mod cursor;
mod edit;
mod error;
mod formula;
mod function;
mod history;
mod keyboard;
pub mod locale;
mod mapping;
mod operator;
mod options;
mod render;
mod selection;
mod structure;
mod token;

pub use cursor::{resolve_cursor_token, Activation, CursorToken, CursorTokenPosition};
pub use error::{EditOutcome, EditRejection, OptionsError};
pub use formula::InternFormula;
pub use function::Function;
pub use history::{EditHistory, FormulaState};
pub use keyboard::EditKey;
pub use locale::{get_locale, DisplayKey, DisplayResolver, FormulaLocale, DE_DE, EN_US};
pub use mapping::ExternInternMapping;
pub use operator::Operator;
pub use options::{EditorOptions, DEFAULT_HISTORY_LIMIT};
pub use render::{render, RenderedFormula};
pub use selection::{SelectionKind, TokenSelection};
pub use structure::{is_well_formed, is_well_nested, TokenRange};
pub use token::{InternToken, TokenKind};
