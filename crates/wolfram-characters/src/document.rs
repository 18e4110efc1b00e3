//! On-disk schema of the compiled tables.
//!
//! Two JSON documents are consumed: a map of named characters and a map of
//! operators. Both preserve file order, which later fixes the tie-breaking
//! order of the scanner's pattern set.

use indexmap::IndexMap;
use serde::Deserialize;

/// One entry of the named-character document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedCharacter {
    /// The code point the Wolfram Language uses internally for this name.
    /// Frequently a private-use code point.
    #[serde(rename = "wl-unicode")]
    pub wl_unicode: String,
    /// The public Unicode rendering, when one exists. May equal
    /// [`wl_unicode`](Self::wl_unicode).
    #[serde(rename = "unicode-equivalent", default)]
    pub unicode_equivalent: Option<String>,
    /// ASCII spelling, when the name denotes an ASCII operator.
    #[serde(default)]
    pub ascii: Option<String>,
    /// May this character appear inside a symbol?
    #[serde(rename = "is-letter-like", default)]
    pub is_letter_like: bool,
    /// Is the Unicode → WL translation defined for this entry?
    #[serde(rename = "has-unicode-inverse", default)]
    pub has_unicode_inverse: bool,
    /// Short alias used by terminal ESC input. Not consulted by the
    /// tokenizer.
    #[serde(rename = "esc-alias", default)]
    pub esc_alias: Option<String>,
    /// Token tag, when this character is an operator.
    #[serde(rename = "operator-name", default)]
    pub operator_name: Option<String>,
}

/// Operator affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Affix {
    Prefix,
    Infix,
    Postfix,
}

/// Operator grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Associativity {
    Left,
    Right,
    None,
    NonAssociative,
}

/// One entry of the operator document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorEntry {
    /// Precedence, on the WolframLanguageData scale.
    pub precedence: i32,
    pub affix: Affix,
    #[serde(default = "default_arity")]
    pub arity: u8,
    pub associativity: Associativity,
    /// `false` for operators the language accepts but attaches no built-in
    /// meaning to.
    #[serde(default = "default_true")]
    pub meaningful: bool,
    /// ASCII spelling, e.g. `"->"` for `Rule`. Box operators spell the
    /// backslashed digraph, e.g. `"\\^"`.
    #[serde(default)]
    pub ascii: Option<String>,
    /// Non-ASCII spellings, WL private-use form first where one exists.
    #[serde(default)]
    pub unicode: Vec<String>,
    /// Recognised only inside `\( … \)` box input.
    #[serde(rename = "box-operator", default)]
    pub box_operator: bool,
}

fn default_arity() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

pub(crate) type NamedCharacterDocument = IndexMap<String, NamedCharacter>;
pub(crate) type OperatorDocument = IndexMap<String, OperatorEntry>;
