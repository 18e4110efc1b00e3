//! Loading and validation of the compiled character tables.

use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::document::{
    Affix, Associativity, NamedCharacter, NamedCharacterDocument, OperatorDocument,
};
use crate::translate::Translator;

/// A consistency violation found while loading the tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed table document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("named character {name:?}: {field} must be a single code point")]
    NotOneCodePoint { name: String, field: &'static str },
    #[error("named characters {first:?} and {second:?} share a wl-unicode code point")]
    DuplicateWlUnicode { first: String, second: String },
    #[error("esc-alias {alias:?} is claimed by both {first:?} and {second:?}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },
    #[error("named character {name:?} has a unicode inverse but no unicode-equivalent")]
    MissingInverseEquivalent { name: String },
    #[error("named characters {first:?} and {second:?} both claim the inverse of one code point")]
    DuplicateInverse { first: String, second: String },
    #[error("operator character {name:?} must not be letter-like")]
    LetterlikeOperator { name: String },
    #[error("operator {name:?} has neither an ascii nor a unicode spelling")]
    OperatorWithoutSpelling { name: String },
    #[error("box operator {name:?} spelling {spelling:?} must begin with a backslash")]
    BadBoxSpelling { name: String, spelling: String },
}

/// The operator attributes consumed by a downstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorRecord {
    pub precedence: i32,
    pub affix: Affix,
    pub arity: u8,
    pub associativity: Associativity,
    pub meaningful: bool,
}

/// The frozen character database.
///
/// Built once by [`CharacterTables::from_json`] (or obtained from
/// [`CharacterTables::builtin`]); read-only afterwards.
#[derive(Debug)]
pub struct CharacterTables {
    named_characters: AHashMap<String, char>,
    letterlikes: AHashSet<char>,
    aliased_characters: AHashMap<String, char>,
    wl_to_unicode: Translator,
    wl_to_ascii: Translator,
    unicode_to_wl: Translator,
    operators: IndexMap<String, OperatorRecord>,
    no_meaning_operators: AHashSet<String>,
    box_operators: IndexMap<String, String>,
    boxing_suffix_chars: AHashSet<char>,
    /// `(operator-name, spelling)` for every non-ASCII spelling, in
    /// document order.
    operator_literals: Vec<(String, String)>,
}

static BUILTIN: Lazy<CharacterTables> = Lazy::new(|| {
    CharacterTables::from_json(
        include_str!("../data/named-characters.json"),
        include_str!("../data/operators.json"),
    )
    .expect("builtin character tables are well-formed")
});

impl CharacterTables {
    /// The tables compiled into this crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded documents fail validation, which would be a
    /// packaging defect rather than a runtime condition.
    #[must_use]
    pub fn builtin() -> &'static CharacterTables {
        &BUILTIN
    }

    /// Parse and validate the two table documents.
    pub fn from_json(named_characters: &str, operators: &str) -> Result<Self, TableError> {
        let characters: NamedCharacterDocument = serde_json::from_str(named_characters)?;
        let operators: OperatorDocument = serde_json::from_str(operators)?;
        Self::build(&characters, &operators)
    }

    fn build(
        characters: &NamedCharacterDocument,
        operators: &OperatorDocument,
    ) -> Result<Self, TableError> {
        let mut named = AHashMap::with_capacity(characters.len());
        let mut letterlikes = AHashSet::new();
        let mut aliased = AHashMap::new();
        let mut seen_wl: AHashMap<char, &str> = AHashMap::new();
        let mut seen_alias: AHashMap<&str, &str> = AHashMap::new();
        let mut seen_inverse: AHashMap<&str, &str> = AHashMap::new();
        let mut wl_to_unicode = Vec::new();
        let mut wl_to_ascii = Vec::new();
        let mut unicode_to_wl = Vec::new();

        for (name, entry) in characters {
            let wl = single_char(&entry.wl_unicode).ok_or_else(|| TableError::NotOneCodePoint {
                name: name.clone(),
                field: "wl-unicode",
            })?;

            if let Some(previous) = seen_wl.insert(wl, name.as_str()) {
                return Err(TableError::DuplicateWlUnicode {
                    first: previous.to_owned(),
                    second: name.clone(),
                });
            }

            if entry.is_letter_like {
                if entry.operator_name.is_some() {
                    return Err(TableError::LetterlikeOperator { name: name.clone() });
                }
                letterlikes.insert(wl);
            }

            if entry.operator_name.is_some()
                && entry.ascii.is_none()
                && entry.unicode_equivalent.is_none()
            {
                return Err(TableError::OperatorWithoutSpelling { name: name.clone() });
            }

            if let Some(alias) = &entry.esc_alias {
                if let Some(previous) = seen_alias.insert(alias.as_str(), name.as_str()) {
                    return Err(TableError::DuplicateAlias {
                        alias: alias.clone(),
                        first: previous.to_owned(),
                        second: name.clone(),
                    });
                }
                aliased.insert(alias.clone(), wl);
            }

            if entry.has_unicode_inverse {
                let uni = entry.unicode_equivalent.as_deref().ok_or_else(|| {
                    TableError::MissingInverseEquivalent { name: name.clone() }
                })?;
                if let Some(previous) = seen_inverse.insert(uni, name.as_str()) {
                    return Err(TableError::DuplicateInverse {
                        first: previous.to_owned(),
                        second: name.clone(),
                    });
                }
                unicode_to_wl.push((uni.to_owned(), wl.to_string()));
            }

            wl_to_unicode.push((wl.to_string(), plain_text(name, entry, true)));
            wl_to_ascii.push((wl.to_string(), plain_text(name, entry, false)));
            named.insert(name.clone(), wl);
        }

        let mut records = IndexMap::with_capacity(operators.len());
        let mut no_meaning = AHashSet::new();
        let mut box_operators = IndexMap::new();
        let mut boxing_suffix_chars: AHashSet<char> = ['(', ')', '*'].into_iter().collect();
        let mut operator_literals = Vec::new();

        for (name, entry) in operators {
            if entry.ascii.is_none() && entry.unicode.is_empty() {
                return Err(TableError::OperatorWithoutSpelling { name: name.clone() });
            }

            if entry.box_operator {
                let spelling = entry.ascii.clone().filter(|s| s.starts_with('\\')).ok_or_else(
                    || TableError::BadBoxSpelling {
                        name: name.clone(),
                        spelling: entry.ascii.clone().unwrap_or_default(),
                    },
                )?;
                if let Some(last) = spelling.chars().last() {
                    boxing_suffix_chars.insert(last);
                }
                box_operators.insert(name.clone(), spelling);
            }

            if !entry.meaningful {
                no_meaning.insert(name.clone());
            }

            for spelling in &entry.unicode {
                operator_literals.push((name.clone(), spelling.clone()));
            }

            records.insert(
                name.clone(),
                OperatorRecord {
                    precedence: entry.precedence,
                    affix: entry.affix,
                    arity: entry.arity,
                    associativity: entry.associativity,
                    meaningful: entry.meaningful,
                },
            );
        }

        debug!(
            named_characters = named.len(),
            letterlikes = letterlikes.len(),
            operators = records.len(),
            box_operators = box_operators.len(),
            "character tables loaded"
        );

        Ok(Self {
            named_characters: named,
            letterlikes,
            aliased_characters: aliased,
            wl_to_unicode: Translator::new(wl_to_unicode),
            wl_to_ascii: Translator::new(wl_to_ascii),
            unicode_to_wl: Translator::new(unicode_to_wl),
            operators: records,
            no_meaning_operators: no_meaning,
            box_operators,
            boxing_suffix_chars,
            operator_literals,
        })
    }

    /// Resolve `\[name]`.
    #[must_use]
    pub fn named_character(&self, name: &str) -> Option<char> {
        self.named_characters.get(name).copied()
    }

    /// May `c` appear inside a symbol (other than as its first character)?
    #[must_use]
    pub fn is_letterlike(&self, c: char) -> bool {
        self.letterlikes.contains(&c)
    }

    /// Resolve a terminal ESC alias.
    #[must_use]
    pub fn aliased_character(&self, alias: &str) -> Option<char> {
        self.aliased_characters.get(alias).copied()
    }

    /// Replace WL-internal code points with their public renderings.
    ///
    /// With `use_unicode` false, only ASCII output is produced; characters
    /// without an ASCII form fall back to their `\[Name]` spelling.
    #[must_use]
    pub fn replace_wl_with_plain_text(&self, input: &str, use_unicode: bool) -> String {
        if use_unicode {
            self.wl_to_unicode.apply(input)
        } else {
            self.wl_to_ascii.apply(input)
        }
    }

    /// Replace public Unicode code points with their WL-internal form,
    /// where the inverse translation is defined.
    #[must_use]
    pub fn replace_unicode_with_wl(&self, input: &str) -> String {
        self.unicode_to_wl.apply(input)
    }

    /// The full operator record, for downstream parsers.
    #[must_use]
    pub fn operator(&self, name: &str) -> Option<&OperatorRecord> {
        self.operators.get(name)
    }

    #[must_use]
    pub fn operator_precedence(&self, name: &str) -> Option<i32> {
        self.operators.get(name).map(|record| record.precedence)
    }

    /// All operator names, in document order.
    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Is `name` accepted by the language without a built-in meaning?
    #[must_use]
    pub fn is_no_meaning_operator(&self, name: &str) -> bool {
        self.no_meaning_operators.contains(name)
    }

    /// `(name, backslashed spelling)` of the operators recognised only in
    /// box input, in document order.
    pub fn box_operators(&self) -> impl Iterator<Item = (&str, &str)> {
        self.box_operators
            .iter()
            .map(|(name, spelling)| (name.as_str(), spelling.as_str()))
    }

    /// May `c` follow a backslash inside a string literal without forming
    /// an escape sequence?
    #[must_use]
    pub fn is_boxing_suffix(&self, c: char) -> bool {
        self.boxing_suffix_chars.contains(&c)
    }

    /// `(operator-name, literal spelling)` for every non-ASCII operator
    /// spelling. Consumed once by the tokenizer when it assembles its
    /// pattern set.
    pub fn operator_unicode_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.operator_literals
            .iter()
            .map(|(name, spelling)| (name.as_str(), spelling.as_str()))
    }

    #[must_use]
    pub fn named_character_count(&self) -> usize {
        self.named_characters.len()
    }

    #[must_use]
    pub fn letterlike_count(&self) -> usize {
        self.letterlikes.len()
    }
}

/// Public rendering of a named character, or its `\[Name]` spelling when
/// no suitable rendering exists.
fn plain_text(name: &str, entry: &NamedCharacter, use_unicode: bool) -> String {
    if let Some(uni) = &entry.unicode_equivalent {
        if use_unicode || uni.is_ascii() {
            return uni.clone();
        }
    }
    if !use_unicode {
        if let Some(ascii) = &entry.ascii {
            return ascii.clone();
        }
    }
    format!("\\[{name}]")
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(characters: &str, operators: &str) -> Result<CharacterTables, TableError> {
        CharacterTables::from_json(characters, operators)
    }

    #[test]
    fn duplicate_wl_unicode_is_rejected() {
        let err = load(
            r#"{
                "Alpha": {"wl-unicode": "α", "is-letter-like": true},
                "AlphaAgain": {"wl-unicode": "α", "is-letter-like": true}
            }"#,
            "{}",
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateWlUnicode { .. }));
    }

    #[test]
    fn inverse_requires_equivalent() {
        let err = load(
            r#"{"Dubious": {"wl-unicode": "", "has-unicode-inverse": true}}"#,
            "{}",
        )
        .unwrap_err();
        assert!(matches!(err, TableError::MissingInverseEquivalent { .. }));
    }

    #[test]
    fn operator_character_must_not_be_letterlike() {
        let err = load(
            r#"{"Odd": {
                "wl-unicode": "",
                "unicode-equivalent": "⨯",
                "is-letter-like": true,
                "operator-name": "Odd"
            }}"#,
            "{}",
        )
        .unwrap_err();
        assert!(matches!(err, TableError::LetterlikeOperator { .. }));
    }

    #[test]
    fn box_operator_spelling_must_be_backslashed() {
        let err = load(
            "{}",
            r#"{"BadBox": {
                "precedence": 100,
                "affix": "Infix",
                "associativity": "Left",
                "ascii": "^",
                "box-operator": true
            }}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::BadBoxSpelling { .. }));
    }

    #[test]
    fn boxing_suffix_always_contains_row_box_characters() {
        let tables = load("{}", "{}").unwrap();
        assert!(tables.is_boxing_suffix('('));
        assert!(tables.is_boxing_suffix(')'));
        assert!(tables.is_boxing_suffix('*'));
        assert!(!tables.is_boxing_suffix('^'));
    }
}
