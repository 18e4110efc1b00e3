//! The escape-sequence decoder.
//!
//! Wolfram Language source may spell any character as a backslash escape:
//! numerically (`\.7A`, `\:03B8`, `\|01D451`, octal `\101`), by name
//! (`\[Theta]`), or as one of the C-style control escapes. The decoder is
//! a pure function over a text buffer; it never reads more input. Callers
//! that scan incrementally must make enough characters available before
//! calling, or handle the `incomplete`/unterminated failures by refilling.

use wolfram_characters::CharacterTables;

use crate::errors::{EscapeError, NumericEscapeTag};

/// Decode one escape sequence.
///
/// `pos` is the byte offset of the character *following* the backslash.
/// On success returns the decoded text together with the byte offset of
/// the first character after the escape.
///
/// ```
/// use wolfram_characters::CharacterTables;
/// use wolfram_scanner::escape::parse_escape_sequence;
///
/// let tables = CharacterTables::builtin();
/// assert_eq!(parse_escape_sequence(tables, "[Theta]", 0).unwrap(), ("θ".into(), 7));
/// assert_eq!(parse_escape_sequence(tables, ".42", 0).unwrap(), ("B".into(), 3));
/// ```
pub fn parse_escape_sequence(
    tables: &CharacterTables,
    text: &str,
    pos: usize,
) -> Result<(String, usize), EscapeError> {
    let Some(c) = text[pos..].chars().next() else {
        return Err(EscapeError::Unknown { text: "\\".into() });
    };

    match c {
        '\\' => Ok(("\\".into(), pos + 1)),
        '.' => parse_radix(text, pos + 1, 2, 16, NumericEscapeTag::Oct2)
            .map(|decoded| (decoded, pos + 3)),
        ':' => parse_radix(text, pos + 1, 4, 16, NumericEscapeTag::Hex)
            .map(|decoded| (decoded, pos + 5)),
        '|' => parse_radix(text, pos + 1, 6, 16, NumericEscapeTag::Hex)
            .map(|decoded| (decoded, pos + 7)),
        '0'..='7' => {
            parse_radix(text, pos, 3, 8, NumericEscapeTag::Oct1).map(|decoded| (decoded, pos + 3))
        }
        '[' => parse_named_character(tables, text, pos + 1),
        'n' | '\n' => Ok(("\n".into(), pos + 1)),
        't' => Ok(("\t".into(), pos + 1)),
        'b' => Ok(("\u{0008}".into(), pos + 1)),
        'f' => Ok(("\u{000c}".into(), pos + 1)),
        'r' => Ok(("\r".into(), pos + 1)),
        ' ' => Ok((" ".into(), pos + 1)),
        // \$ keeps its backslash.
        '$' => Ok(("\\$".into(), pos + 1)),
        '!' | '"' => Ok((c.to_string(), pos + 1)),
        _ => Err(EscapeError::Unknown {
            text: format!("\\{c}"),
        }),
    }
}

/// Decode `digits` characters starting at `start` as a code point in the
/// given radix.
fn parse_radix(
    text: &str,
    start: usize,
    digits: usize,
    radix: u32,
    tag: NumericEscapeTag,
) -> Result<String, EscapeError> {
    let fail = |incomplete: bool| EscapeError::Numeric {
        tag,
        text: text[start.min(text.len())..]
            .trim_end_matches('\n')
            .to_owned(),
        incomplete,
    };

    let slice = text.get(start..start + digits).ok_or_else(|| fail(true))?;
    let value = u32::from_str_radix(slice, radix).map_err(|_| fail(false))?;
    let decoded = char::from_u32(value).ok_or_else(|| fail(false))?;
    Ok(decoded.to_string())
}

/// Decode the `Name]` part of `\[Name]`; `start` points just past the `[`.
fn parse_named_character(
    tables: &CharacterTables,
    text: &str,
    start: usize,
) -> Result<(String, usize), EscapeError> {
    let Some(end) = text[start..].find(']').map(|i| start + i) else {
        return Err(EscapeError::UnterminatedName {
            name: text[start..].trim_end_matches('\n').to_owned(),
        });
    };

    let name = &text[start..end];
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
        if let Some(decoded) = tables.named_character(name) {
            return Ok((decoded.to_string(), end + 1));
        }
    }

    Err(EscapeError::UnknownName {
        name: name.to_owned(),
    })
}
