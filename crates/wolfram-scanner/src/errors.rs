//! Error definitions for the tokenization process.
//!
//! The tokenizer records a diagnostic message on its feeder before any of
//! these errors is returned, so callers that want the formatted message
//! records look at [`LineFeeder::messages`](crate::feed::LineFeeder::messages)
//! after catching the error.

use thiserror::Error;

/// A malformed escape sequence, reported by the escape decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// A numeric escape whose digits are missing, truncated, in the wrong
    /// radix, or outside the valid code-point range.
    #[error("invalid {} escape sequence: {text:?}", tag_description(.tag))]
    Numeric {
        /// One of `sntoct1`, `sntoct2`, `snthex`.
        tag: NumericEscapeTag,
        text: String,
        /// The digits ran past the end of the available text; more input
        /// could still complete the escape.
        incomplete: bool,
    },
    /// `\[Name]` with a name the character tables do not know.
    #[error("unknown named character: {name:?}")]
    UnknownName { name: String },
    /// `\[` with no closing `]` in the available text.
    #[error("unterminated named character: {name:?}")]
    UnterminatedName { name: String },
    /// A backslash followed by a character that starts no escape form.
    #[error("unknown escape sequence: {text:?}")]
    Unknown { text: String },
}

/// Diagnostic tag of a malformed numeric escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericEscapeTag {
    /// Bad 3-digit octal escape (`\NNN`).
    Oct1,
    /// Bad 2-digit hex escape (`\.HH`).
    Oct2,
    /// Bad 4- or 6-digit hex escape (`\:HHHH`, `\|HHHHHH`).
    Hex,
}

fn tag_description(tag: &NumericEscapeTag) -> &'static str {
    match tag {
        NumericEscapeTag::Oct1 => "octal",
        NumericEscapeTag::Oct2 => "2-digit hex",
        NumericEscapeTag::Hex => "hex",
    }
}

impl EscapeError {
    /// The message tag recorded for this error.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Numeric { tag: NumericEscapeTag::Oct1, .. } => "sntoct1",
            Self::Numeric { tag: NumericEscapeTag::Oct2, .. } => "sntoct2",
            Self::Numeric { tag: NumericEscapeTag::Hex, .. } => "snthex",
            Self::UnknownName { .. } | Self::UnterminatedName { .. } => "sntufn",
            Self::Unknown { .. } => "stresc",
        }
    }

    /// The offending text, as recorded in the diagnostic message.
    #[must_use]
    pub fn offending_text(&self) -> &str {
        match self {
            Self::Numeric { text, .. } | Self::Unknown { text } => text,
            Self::UnknownName { name } | Self::UnterminatedName { name } => name,
        }
    }
}

/// An error surfaced by [`Tokeniser::next_token`](crate::Tokeniser::next_token).
///
/// The tokenizer never recovers internally; recovery, if any, is the
/// caller's business. `End` is a normal token, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The token cannot be finished and the feeder has no more input.
    /// Recorded with tag `sntxi`.
    #[error("incomplete input: {text:?}")]
    Incomplete { text: String },
    /// The input at `pos` cannot begin any token. Recorded with tag
    /// `sntxb` (at the start of the buffer) or `sntxf`.
    #[error("no valid token at offset {pos}")]
    Invalid { pos: usize },
    /// A malformed escape sequence. Recorded with the escape's own tag.
    #[error(transparent)]
    Escape(EscapeError),
    /// An unknown `\[Name]`. Recorded with tag `sntufn`.
    #[error("unknown named character \\[{name}]")]
    NamedCharacter { name: String },
}

impl From<EscapeError> for ScanError {
    fn from(err: EscapeError) -> Self {
        match err {
            EscapeError::UnknownName { name } | EscapeError::UnterminatedName { name } => {
                Self::NamedCharacter { name }
            }
            other => Self::Escape(other),
        }
    }
}
