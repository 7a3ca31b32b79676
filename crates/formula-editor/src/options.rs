use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::locale::{get_locale, FormulaLocale, EN_US};

pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Host-tunable editor behaviour.
///
/// Every field has a default, so hosts only need to spell out what they change:
///
/// ```
/// use formula_editor::EditorOptions;
///
/// let options = EditorOptions::from_json_str(r#"{ "locale": "de_DE.UTF-8" }"#).unwrap();
/// assert_eq!(options.locale().id, "de-DE");
/// assert!(options.select_first_parameter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Built-in display locale id (`en-US`, `de-DE`, or any spelling `get_locale` accepts).
    pub locale: String,
    /// Select the first parameter of a function typed on the keyboard.
    pub select_first_parameter: bool,
    /// Undo depth of an [`crate::EditHistory`] built from these options.
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            locale: EN_US.id.to_string(),
            select_first_parameter: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EditorOptions {
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured display locale, falling back to en-US for unknown ids.
    pub fn locale(&self) -> &'static FormulaLocale {
        get_locale(&self.locale).unwrap_or_else(|| {
            log::warn!(
                "unknown formula editor locale {:?}, falling back to {}",
                self.locale,
                EN_US.id
            );
            &EN_US
        })
    }
}
