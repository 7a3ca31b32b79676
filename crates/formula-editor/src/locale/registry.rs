use std::collections::HashMap;
use std::sync::OnceLock;

/// Translation table from canonical identifiers to display text.
///
/// Data lives outside the Rust source in TSV files under `src/locale/data/` (one
/// `canonical<TAB>display` pair per line, `#` starts a comment line). Maps are built lazily on
/// first use.
#[derive(Debug)]
struct DisplayTranslations {
    data_tsv: &'static str,
    map: OnceLock<HashMap<String, &'static str>>,
}

impl DisplayTranslations {
    const fn new(data_tsv: &'static str) -> Self {
        Self {
            data_tsv,
            map: OnceLock::new(),
        }
    }

    fn map(&self) -> &HashMap<String, &'static str> {
        self.map.get_or_init(|| {
            let mut map = HashMap::new();
            // Remember where each key came from so duplicate entries produce actionable panics.
            let mut seen: HashMap<String, (usize, &'static str)> = HashMap::new();

            for (idx, raw_line) in self.data_tsv.lines().enumerate() {
                let line_no = idx + 1;
                let line = raw_line.trim_end_matches(['\r', '\n']);
                if line.trim().is_empty() || line.trim_start().starts_with('#') {
                    continue;
                }

                let (canon, text) = line.split_once('\t').unwrap_or_else(|| {
                    panic!("invalid display text line (expected TSV) at line {line_no}: {line:?}")
                });
                let canon = canon.trim();
                let text = text.trim();
                if canon.is_empty() || text.is_empty() {
                    panic!("invalid display text line (empty entry) at line {line_no}: {line:?}");
                }

                let key = canon.to_ascii_uppercase();
                if let Some((prev_no, prev_line)) = seen.get(&key) {
                    panic!(
                        "duplicate display text key {key:?}\n  first: line {prev_no}: {prev_line:?}\n  second: line {line_no}: {line:?}"
                    );
                }
                seen.insert(key.clone(), (line_no, line));
                map.insert(key, text);
            }

            map
        })
    }

    fn get(&self, canonical_id: &str) -> Option<&'static str> {
        self.map().get(canonical_id).copied()
    }
}

static EN_US_TEXT: DisplayTranslations =
    DisplayTranslations::new(include_str!("data/en-US.tsv"));
static DE_DE_TEXT: DisplayTranslations =
    DisplayTranslations::new(include_str!("data/de-DE.tsv"));

/// Built-in display locale.
///
/// Intern tokens keep canonical identifiers (`SIN`, `PLUS`, ...). A locale maps them to the text
/// shown in the formula editor. Locales other than en-US only list what they translate and fall
/// back to en-US for the rest.
#[derive(Debug)]
pub struct FormulaLocale {
    pub id: &'static str,
    texts: &'static DisplayTranslations,
    fallback: Option<&'static FormulaLocale>,
}

impl FormulaLocale {
    /// Display text for a canonical identifier.
    ///
    /// Identifiers missing from every table render verbatim.
    pub fn display_text<'a>(&'a self, canonical_id: &'a str) -> &'a str {
        if let Some(text) = self.texts.get(canonical_id) {
            return text;
        }
        match self.fallback {
            Some(fallback) => fallback.display_text(canonical_id),
            None => canonical_id,
        }
    }
}

pub static EN_US: FormulaLocale = FormulaLocale {
    id: "en-US",
    texts: &EN_US_TEXT,
    fallback: None,
};

/// German: `,` decimal mark, `;` parameter delimiter and a few translated function names
/// (`wurzel`, `zufall`, `runden`).
pub static DE_DE: FormulaLocale = FormulaLocale {
    id: "de-DE",
    texts: &DE_DE_TEXT,
    fallback: Some(&EN_US),
};

pub fn get_locale(id: &str) -> Option<&'static FormulaLocale> {
    match super::normalize_locale_id(id)? {
        "en-US" => Some(&EN_US),
        "de-DE" => Some(&DE_DE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::locale::DisplayKey;
    use crate::operator::Operator;
    use std::any::Any;
    use std::panic::AssertUnwindSafe;

    fn panic_message(err: &(dyn Any + Send)) -> String {
        if let Some(msg) = err.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = err.downcast_ref::<String>() {
            msg.clone()
        } else {
            "<non-string panic>".to_string()
        }
    }

    #[test]
    fn en_us_covers_every_identifier() {
        let keys = Function::ALL
            .into_iter()
            .map(DisplayKey::Function)
            .chain(Operator::ALL.into_iter().map(DisplayKey::Operator))
            .chain([
                DisplayKey::BracketOpen,
                DisplayKey::BracketClose,
                DisplayKey::ParameterDelimiter,
                DisplayKey::DecimalMark,
            ]);
        for key in keys {
            assert!(
                EN_US_TEXT.get(key.canonical_id()).is_some(),
                "missing en-US display text for {key:?}"
            );
        }
    }

    #[test]
    fn de_de_falls_back_to_en_us() {
        assert_eq!(DE_DE.display_text("SQRT"), "wurzel");
        assert_eq!(DE_DE.display_text("SIN"), "sin");
        assert_eq!(DE_DE.display_text("DECIMAL_MARK"), ",");
        assert_eq!(EN_US.display_text("NOT_A_KEY"), "NOT_A_KEY");
    }

    #[test]
    fn duplicate_key_panics_with_diagnostics() {
        let translations = DisplayTranslations::new(
            "\
SIN\tsin
sin\tsinus
",
        );
        let err = std::panic::catch_unwind(AssertUnwindSafe(|| {
            translations.map();
        }))
        .expect_err("expected duplicate key to panic");

        let msg = panic_message(&*err);
        assert!(msg.contains("duplicate display text key"));
        assert!(msg.contains("\"SIN\""));
        assert!(msg.contains("line 1"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn missing_tab_panics() {
        let translations = DisplayTranslations::new("SIN sin\n");
        let err = std::panic::catch_unwind(AssertUnwindSafe(|| {
            translations.map();
        }))
        .expect_err("expected malformed line to panic");
        assert!(panic_message(&*err).contains("expected TSV"));
    }
}
