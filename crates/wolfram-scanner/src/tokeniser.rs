//! The tokenizer state machine.

use once_cell::sync::Lazy;
use smallvec::SmallVec;
use tracing::trace;
use wolfram_characters::{is_wl_letter, CharacterTables};

use crate::errors::{EscapeError, ScanError};
use crate::escape::parse_escape_sequence;
use crate::feed::{LineFeeder, Message};
use crate::pattern::{Candidate, Scanner, TokenTable};
use crate::token::{Token, TokenKind};

/// The pattern set assembled over the builtin character tables, shared by
/// every [`Tokeniser::new`] instance.
static BUILTIN_TABLE: Lazy<TokenTable> = Lazy::new(|| TokenTable::new(CharacterTables::builtin()));

/// Tokenization mode. `Filename` applies between a `Get`/`Put`/
/// `PutAppend` token and the file name that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Expression,
    Filename,
}

/// A tokenizer for the Wolfram Language.
///
/// Pulls lines from a [`LineFeeder`] on demand and hands out one token per
/// [`next_token`](Self::next_token) call. At the end of input it returns
/// the `End` token, indefinitely. Diagnostics are recorded on the feeder.
///
/// ```
/// use wolfram_scanner::{SingleLineFeeder, TokenKind, Tokeniser};
///
/// let mut feeder = SingleLineFeeder::new("x = y");
/// let mut tokeniser = Tokeniser::new(&mut feeder);
/// let token = tokeniser.next_token().unwrap();
/// assert_eq!((token.kind, token.text.as_str(), token.pos), (TokenKind::Symbol, "x", 0));
/// ```
pub struct Tokeniser<'a> {
    feeder: &'a mut dyn LineFeeder,
    tables: &'a CharacterTables,
    patterns: &'a TokenTable,
    /// Source text accumulated from the feeder so far.
    code: String,
    /// Byte cursor into `code`.
    pos: usize,
    mode: Mode,
    /// True while the consumer is between `\(` and `\)`. Toggled by the
    /// consumer, never by the tokenizer itself.
    pub is_inside_box: bool,
}

impl<'a> Tokeniser<'a> {
    /// Create a tokenizer over the builtin character tables and read the
    /// first line from `feeder`.
    ///
    /// # Panics
    ///
    /// Panics if the builtin character tables fail to load.
    pub fn new(feeder: &'a mut dyn LineFeeder) -> Self {
        Self::with_tables(feeder, CharacterTables::builtin(), &BUILTIN_TABLE)
    }

    /// Create a tokenizer over an explicit table handle and its pattern
    /// set.
    pub fn with_tables(
        feeder: &'a mut dyn LineFeeder,
        tables: &'a CharacterTables,
        patterns: &'a TokenTable,
    ) -> Self {
        let code = feeder.feed();
        Self {
            feeder,
            tables,
            patterns,
            code,
            pos: 0,
            mode: Mode::Expression,
            is_inside_box: false,
        }
    }

    /// The diagnostics recorded on the feeder so far.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.feeder.messages()
    }

    /// Return the next token.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        self.skip_blank()?;
        if self.pos >= self.code.len() {
            return Ok(Token::new(TokenKind::End, "", self.code.len()));
        }
        match self.mode {
            Mode::Expression => self.next_expression_token(),
            Mode::Filename => self.next_filename_token(),
        }
    }

    /// Skip whitespace and comments. Comments nest; inside one, escape
    /// sequences mean nothing.
    fn skip_blank(&mut self) -> Result<(), ScanError> {
        let mut comments: SmallVec<[usize; 4]> = SmallVec::new();
        loop {
            if self.pos >= self.code.len() {
                if comments.is_empty() {
                    return Ok(());
                }
                self.refill()?;
                continue;
            }
            let rest = &self.code[self.pos..];
            if !comments.is_empty() {
                if rest.starts_with("(*") {
                    comments.push(self.pos);
                    self.pos += 2;
                } else if rest.starts_with("*)") {
                    comments.pop();
                    self.pos += 2;
                } else {
                    self.pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            } else if rest.starts_with("(*") {
                comments.push(self.pos);
                self.pos += 2;
            } else {
                match rest.chars().next() {
                    Some(' ' | '\t' | '\r' | '\n') => self.pos += 1,
                    // A backslash-newline pair is whitespace; at the end
                    // of the buffer it is a line continuation and demands
                    // more input.
                    Some('\\') if rest[1..].starts_with('\n') => {
                        self.pos += 2;
                        if self.pos >= self.code.len() {
                            self.refill()?;
                        }
                    }
                    _ => return Ok(()),
                }
            }
        }
    }

    /// Append one more line to the buffer, or fail with `sntxi` when the
    /// feeder has nothing left.
    fn refill(&mut self) -> Result<(), ScanError> {
        let line = self.feeder.feed();
        if line.is_empty() {
            let text = self.code[self.pos..].trim_end().to_owned();
            self.feeder.message("Syntax", "sntxi", &[&text]);
            return Err(ScanError::Incomplete { text });
        }
        trace!(
            line_no = self.feeder.line_no(),
            bytes = line.len(),
            "buffer refilled"
        );
        self.code.push_str(&line);
        Ok(())
    }

    fn next_expression_token(&mut self) -> Result<Token, ScanError> {
        let start = self.pos;
        let patterns = self.patterns;
        let c = self.code[start..]
            .chars()
            .next()
            .expect("skip_blank leaves a character");

        if let Some(candidates) = patterns.candidates(c) {
            for candidate in candidates {
                match candidate {
                    Candidate::Lit(kind, lit) => {
                        if self.code[start..].starts_with(lit) {
                            return self.emit_literal(*kind, lit.len(), start);
                        }
                    }
                    Candidate::Table(kind, lit) => {
                        if self.code[start..].starts_with(lit.as_str()) {
                            return self.emit_literal(*kind, lit.len(), start);
                        }
                    }
                    Candidate::Scan(scanner) => {
                        if let Some(token) = self.try_scanner(*scanner, start)? {
                            return Ok(token);
                        }
                    }
                }
            }
        } else if !c.is_ascii() {
            if let Some(literals) = patterns.unicode_literals(c) {
                for (kind, lit) in literals {
                    if self.code[start..].starts_with(lit.as_str()) {
                        return self.emit_literal(*kind, lit.len(), start);
                    }
                }
            }
            if is_symbol_start(self.tables, c) {
                if let Some(token) = self.try_scanner(Scanner::Pattern, start)? {
                    return Ok(token);
                }
                if let Some(token) = self.try_scanner(Scanner::Symbol, start)? {
                    return Ok(token);
                }
            }
        }

        self.sntx_message(start);
        Err(ScanError::Invalid { pos: start })
    }

    /// Emit a literal match, handling the tags that need more than the
    /// matched text.
    fn emit_literal(&mut self, kind: TokenKind, len: usize, start: usize) -> Result<Token, ScanError> {
        if kind == TokenKind::RawBackslash {
            return self.raw_backslash(start);
        }
        self.pos = start + len;
        self.note_mode(kind);
        Ok(Token::new(kind, &self.code[start..self.pos], start))
    }

    fn note_mode(&mut self, kind: TokenKind) {
        if matches!(kind, TokenKind::Get | TokenKind::Put | TokenKind::PutAppend) {
            self.mode = Mode::Filename;
            trace!(kind = kind.as_str(), "entering filename mode");
        }
    }

    fn try_scanner(&mut self, scanner: Scanner, start: usize) -> Result<Option<Token>, ScanError> {
        let token = match scanner {
            Scanner::Number => {
                match_number(&self.code, start).map(|end| self.take(TokenKind::Number, start, end))
            }
            Scanner::Pattern => match_pattern(self.tables, &self.code, start)
                .map(|end| self.take(TokenKind::Pattern, start, end)),
            Scanner::Slot => match_slot(self.tables, &self.code, start)
                .map(|end| self.take(TokenKind::Slot, start, end)),
            Scanner::SlotSequence => match_slot_sequence(&self.code, start)
                .map(|end| self.take(TokenKind::SlotSequence, start, end)),
            Scanner::Out => {
                match_out(&self.code, start).map(|end| self.take(TokenKind::Out, start, end))
            }
            Scanner::Unset => {
                match_unset(&self.code, start).map(|end| self.take(TokenKind::Unset, start, end))
            }
            Scanner::Symbol => return self.scan_symbol(start),
            Scanner::StringLit => return self.scan_string(start).map(Some),
        };
        Ok(token)
    }

    fn take(&mut self, kind: TokenKind, start: usize, end: usize) -> Token {
        self.pos = end;
        Token::new(kind, &self.code[start..end], start)
    }

    /// The symbol handler: an initial pattern match, then the extension
    /// loop that absorbs letter-like escape sequences (`abc\[Mu]1`).
    fn scan_symbol(&mut self, start: usize) -> Result<Option<Token>, ScanError> {
        let Some(initial_end) = match_symbol(self.tables, &self.code, start) else {
            return Ok(None);
        };
        let mut text = self.code[start..initial_end].to_owned();
        self.pos = initial_end;
        self.extend_symbol(&mut text)?;
        Ok(Some(Token::new(TokenKind::Symbol, text, start)))
    }

    fn extend_symbol(&mut self, text: &mut String) -> Result<(), ScanError> {
        loop {
            let run_start = self.pos;
            while let Some(c) = self.code[self.pos..].chars().next() {
                if is_symbol_char(self.tables, c) {
                    self.pos += c.len_utf8();
                } else {
                    break;
                }
            }
            if self.pos > run_start {
                text.push_str(&self.code[run_start..self.pos]);
            }

            if !self.code[self.pos..].starts_with('\\') {
                return Ok(());
            }

            match parse_escape_sequence(self.tables, &self.code, self.pos + 1) {
                Ok((decoded, end)) => {
                    let mut chars = decoded.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None)
                            if is_wl_letter(c) || self.tables.is_letterlike(c) =>
                        {
                            text.push(c);
                            self.pos = end;
                        }
                        // Not letter-like: the backslash stays for the
                        // dispatcher.
                        _ => return Ok(()),
                    }
                }
                Err(EscapeError::UnterminatedName { .. }) if !self.feeder.empty() => {
                    self.refill()?;
                }
                Err(EscapeError::Numeric { incomplete: true, .. }) if !self.feeder.empty() => {
                    self.refill()?;
                }
                // Failed escapes end the symbol without a complaint; the
                // dispatcher sees the backslash next.
                Err(_) => return Ok(()),
            }
        }
    }

    /// The string handler. The body may span any number of fed lines.
    fn scan_string(&mut self, start: usize) -> Result<Token, ScanError> {
        debug_assert!(self.code[start..].starts_with('"'));
        let mut text = String::from("\"");
        self.pos = start + 1;
        loop {
            if self.pos >= self.code.len() {
                self.refill()?;
                continue;
            }
            let c = self.code[self.pos..].chars().next().expect("inside the buffer");
            match c {
                '"' => {
                    self.pos += 1;
                    text.push('"');
                    return Ok(Token::new(TokenKind::String, text, start));
                }
                '\\' => {
                    if self.pos + 1 >= self.code.len() {
                        self.refill()?;
                        continue;
                    }
                    let next = self.code[self.pos + 1..].chars().next().expect("checked above");
                    if self.tables.is_boxing_suffix(next) || next == '{' || next == '}' {
                        // `"\(x\)"` keeps its backslashes instead of
                        // opening box input.
                        text.push('\\');
                        text.push(next);
                        self.pos += 1 + next.len_utf8();
                        continue;
                    }
                    match parse_escape_sequence(self.tables, &self.code, self.pos + 1) {
                        Ok((decoded, end)) => {
                            if matches!(next, '.' | ':' | '|' | '[' | '0'..='7') {
                                // Numeric and named escapes become their
                                // characters.
                                text.push_str(&decoded);
                            } else {
                                // Control escapes keep their source
                                // spelling.
                                text.push_str(&self.code[self.pos..end]);
                            }
                            self.pos = end;
                        }
                        Err(EscapeError::UnterminatedName { .. }) => self.refill()?,
                        Err(EscapeError::Numeric { incomplete: true, .. })
                            if !self.feeder.empty() =>
                        {
                            self.refill()?;
                        }
                        Err(err) => return Err(self.escape_error(err)),
                    }
                }
                other => {
                    text.push(other);
                    self.pos += other.len_utf8();
                }
            }
        }
    }

    /// The handler behind a bare backslash: decode the escape after it
    /// and decide what the decoded text is.
    fn raw_backslash(&mut self, start: usize) -> Result<Token, ScanError> {
        loop {
            if start + 1 >= self.code.len() {
                self.refill()?;
                continue;
            }
            match parse_escape_sequence(self.tables, &self.code, start + 1) {
                Ok((decoded, end)) => {
                    // A named operator without built-in meaning is still
                    // an operator token.
                    if self.code[start + 1..].starts_with('[') {
                        let name = &self.code[start + 2..end - 1];
                        if self.tables.is_no_meaning_operator(name) {
                            if let Some(kind) = TokenKind::from_name(name) {
                                self.pos = end;
                                return Ok(Token::new(kind, decoded, start));
                            }
                        }
                    }
                    return self.redispatch(&decoded, start, end);
                }
                Err(EscapeError::UnterminatedName { .. }) => self.refill()?,
                Err(EscapeError::Numeric { incomplete: true, .. }) if !self.feeder.empty() => {
                    self.refill()?;
                }
                Err(err) => return Err(self.escape_error(err)),
            }
        }
    }

    /// Re-run pattern dispatch on the decoded text of an escape.
    fn redispatch(&mut self, decoded: &str, start: usize, end: usize) -> Result<Token, ScanError> {
        let Some(c) = decoded.chars().next() else {
            self.pos = start + 1;
            return Ok(Token::new(TokenKind::RawBackslash, "\\", start));
        };

        // A decoded letter starts a symbol that keeps absorbing from the
        // live buffer after the escape.
        if is_symbol_start(self.tables, c)
            && match_symbol(self.tables, decoded, 0) == Some(decoded.len())
        {
            let mut text = decoded.to_owned();
            self.pos = end;
            self.extend_symbol(&mut text)?;
            return Ok(Token::new(TokenKind::Symbol, text, start));
        }

        // An escaped double quote cannot begin a token.
        if c == '"' {
            let text = self.code[start..].trim_end_matches('\n').to_owned();
            self.feeder.message("Syntax", "sntxi", &[&text]);
            return Err(ScanError::Invalid { pos: start });
        }

        if let Some(kind) = self.dispatch_whole(decoded) {
            self.pos = end;
            self.note_mode(kind);
            return Ok(Token::new(kind, decoded, start));
        }

        if end > start + 2 {
            // A named or numeric escape that decodes to whitespace
            // (`\[RawSpace]`, `\[NewLine]`) acts as whitespace; anything
            // else it could decode to is no token at all.
            self.pos = end;
            if decoded.chars().all(char::is_whitespace) {
                return self.next_token();
            }
            self.sntx_message(start);
            return Err(ScanError::Invalid { pos: start });
        }

        // A single-character escape the dispatcher cannot place leaves
        // the backslash standing alone.
        self.pos = start + 1;
        Ok(Token::new(TokenKind::RawBackslash, "\\", start))
    }

    /// Which tag would `decoded` carry if it were the entire input?
    fn dispatch_whole(&self, decoded: &str) -> Option<TokenKind> {
        let c = decoded.chars().next()?;
        if let Some(candidates) = self.patterns.candidates(c) {
            for candidate in candidates {
                match candidate {
                    Candidate::Lit(kind, lit) if *lit == decoded => return Some(*kind),
                    Candidate::Table(kind, lit) if lit.as_str() == decoded => return Some(*kind),
                    Candidate::Scan(scanner) => {
                        let end = match scanner {
                            Scanner::Number => match_number(decoded, 0),
                            Scanner::Pattern => match_pattern(self.tables, decoded, 0),
                            Scanner::Slot => match_slot(self.tables, decoded, 0),
                            Scanner::SlotSequence => match_slot_sequence(decoded, 0),
                            Scanner::Out => match_out(decoded, 0),
                            Scanner::Unset => match_unset(decoded, 0),
                            Scanner::Symbol | Scanner::StringLit => None,
                        };
                        if end == Some(decoded.len()) {
                            return Some(scanner_kind(*scanner));
                        }
                    }
                    _ => {}
                }
            }
            return None;
        }
        self.patterns
            .unicode_literals(c)?
            .iter()
            .find(|(_, lit)| lit == decoded)
            .map(|(kind, _)| *kind)
    }

    fn next_filename_token(&mut self) -> Result<Token, ScanError> {
        let start = self.pos;
        if let Some(end) = match_filename(&self.code, start) {
            self.mode = Mode::Expression;
            trace!("leaving filename mode");
            return Ok(self.take(TokenKind::Filename, start, end));
        }
        self.sntx_message(start);
        Err(ScanError::Invalid { pos: start })
    }

    /// Record the `sntxb`/`sntxf` diagnostic for a failed dispatch.
    fn sntx_message(&mut self, pos: usize) {
        let pre = self.code[..pos].to_owned();
        let post = self.code[pos..].trim_end_matches('\n').to_owned();
        if pos == 0 {
            self.feeder.message("Syntax", "sntxb", &[&post]);
        } else {
            self.feeder.message("Syntax", "sntxf", &[&pre, &post]);
        }
    }

    /// Record the message for an escape failure and convert it.
    fn escape_error(&mut self, err: EscapeError) -> ScanError {
        self.feeder
            .message("Syntax", err.tag(), &[err.offending_text()]);
        err.into()
    }
}

fn scanner_kind(scanner: Scanner) -> TokenKind {
    match scanner {
        Scanner::Number => TokenKind::Number,
        Scanner::Pattern => TokenKind::Pattern,
        Scanner::Slot => TokenKind::Slot,
        Scanner::SlotSequence => TokenKind::SlotSequence,
        Scanner::Out => TokenKind::Out,
        Scanner::Unset => TokenKind::Unset,
        Scanner::Symbol => TokenKind::Symbol,
        Scanner::StringLit => TokenKind::String,
    }
}

/// Is `text` in its entirety a valid symbol name?
#[must_use]
pub fn is_symbol_name(text: &str) -> bool {
    !text.is_empty()
        && match_symbol(CharacterTables::builtin(), text, 0) == Some(text.len())
}

/// May `c` appear inside a symbol?
fn is_symbol_char(tables: &CharacterTables, c: char) -> bool {
    is_wl_letter(c) || tables.is_letterlike(c) || c.is_ascii_digit() || c == '$'
}

/// May `c` begin a symbol?
fn is_symbol_start(tables: &CharacterTables, c: char) -> bool {
    c == '`' || (is_symbol_char(tables, c) && !c.is_ascii_digit())
}

fn scan_digits(text: &str, at: usize) -> usize {
    scan_while(text, at, |c| c.is_ascii_digit())
}

fn scan_while(text: &str, at: usize, test: impl Fn(char) -> bool) -> usize {
    let mut end = at;
    for c in text[at..].chars() {
        if test(c) {
            end += c.len_utf8();
        } else {
            break;
        }
    }
    end
}

/// Decimal digits with at most one dot, at least one digit.
fn scan_mantissa(text: &str, at: usize) -> Option<usize> {
    let int_end = scan_digits(text, at);
    if int_end > at {
        if text[int_end..].starts_with('.') {
            Some(scan_digits(text, int_end + 1))
        } else {
            Some(int_end)
        }
    } else if text[at..].starts_with('.') {
        let frac_end = scan_digits(text, at + 1);
        (frac_end > at + 1).then_some(frac_end)
    } else {
        None
    }
}

/// Digits of an explicit-base literal: alphanumerics with at most one
/// dot. Whether the digits fit the base is the parser's business, not
/// ours.
fn scan_base_mantissa(text: &str, at: usize) -> Option<usize> {
    let is_base_digit = |c: char| c.is_ascii_alphanumeric();
    let int_end = scan_while(text, at, is_base_digit);
    if int_end > at {
        if text[int_end..].starts_with('.') {
            Some(scan_while(text, int_end + 1, is_base_digit))
        } else {
            Some(int_end)
        }
    } else if text[at..].starts_with('.') {
        let frac_end = scan_while(text, at + 1, is_base_digit);
        (frac_end > at + 1).then_some(frac_end)
    } else {
        None
    }
}

/// The number pattern: explicit-base form or plain
/// mantissa, optional precision/accuracy mark, optional `*^` exponent.
pub(crate) fn match_number(text: &str, at: usize) -> Option<usize> {
    let digits_end = scan_digits(text, at);
    let mut end = match (digits_end > at && text[digits_end..].starts_with("^^"))
        .then(|| scan_base_mantissa(text, digits_end + 2))
        .flatten()
    {
        Some(base_end) => base_end,
        None => scan_mantissa(text, at)?,
    };

    if text[end..].starts_with('`') {
        let backticks = if text[end + 1..].starts_with('`') { 2 } else { 1 };
        let mut p = end + backticks;
        if text[p..].starts_with(['+', '-']) {
            p += 1;
        }
        match scan_mantissa(text, p) {
            Some(mantissa_end) => end = mantissa_end,
            // Accuracy needs its number; fall back to the bare
            // precision mark.
            None => end += 1,
        }
    }

    if text[end..].starts_with("*^") {
        let mut p = end + 2;
        if text[p..].starts_with(['+', '-']) {
            p += 1;
        }
        let exponent_end = scan_digits(text, p);
        if exponent_end > p {
            end = exponent_end;
        }
    }

    // A terminal dot right before another dot belongs to `..`, not to
    // the number: `1..` is Number("1") Repeated("..").
    if text[..end].ends_with('.') && text[end..].starts_with('.') {
        end -= 1;
    }
    Some(end)
}

/// One segment of a symbol: a letter or letter-like character followed by
/// letters, digits and `$`.
fn match_base(tables: &CharacterTables, text: &str, at: usize) -> Option<usize> {
    let first = text[at..].chars().next()?;
    if !is_symbol_char(tables, first) || first.is_ascii_digit() {
        return None;
    }
    Some(scan_while(text, at, |c| is_symbol_char(tables, c)))
}

/// A full symbol: optional context mark, a segment, then any number of
/// `` ` ``-separated segments.
pub(crate) fn match_symbol(tables: &CharacterTables, text: &str, at: usize) -> Option<usize> {
    let mut p = at;
    if text[p..].starts_with('`') {
        p += 1;
    }
    let mut end = match_base(tables, text, p)?;
    while text[end..].starts_with('`') {
        match match_base(tables, text, end + 1) {
            Some(next_end) => end = next_end,
            None => break,
        }
    }
    Some(end)
}

/// `symbol?_` plus the optional blank decorations: `_.`, `__`, `___`,
/// each with an optional head.
pub(crate) fn match_pattern(tables: &CharacterTables, text: &str, at: usize) -> Option<usize> {
    let mut p = at;
    if let Some(symbol_end) = match_symbol(tables, text, p) {
        p = symbol_end;
    }
    if !text[p..].starts_with('_') {
        return None;
    }
    p += 1;
    if text[p..].starts_with('.') {
        return Some(p + 1);
    }
    let mut extra = 0;
    while extra < 2 && text[p..].starts_with('_') {
        p += 1;
        extra += 1;
    }
    if let Some(head_end) = match_symbol(tables, text, p) {
        p = head_end;
    }
    Some(p)
}

/// `#`, `#5`, `#name`.
pub(crate) fn match_slot(tables: &CharacterTables, text: &str, at: usize) -> Option<usize> {
    if !text[at..].starts_with('#') {
        return None;
    }
    let after = at + 1;
    let digits_end = scan_digits(text, after);
    if digits_end > after {
        return Some(digits_end);
    }
    Some(match_base(tables, text, after).unwrap_or(after))
}

/// `##`, `##3`.
pub(crate) fn match_slot_sequence(text: &str, at: usize) -> Option<usize> {
    if !text[at..].starts_with("##") {
        return None;
    }
    Some(scan_digits(text, at + 2))
}

/// `%`, `%%%`, `%42`.
pub(crate) fn match_out(text: &str, at: usize) -> Option<usize> {
    if !text[at..].starts_with('%') {
        return None;
    }
    let after = at + 1;
    if text[after..].starts_with('%') {
        return Some(scan_while(text, after, |c| c == '%'));
    }
    Some(scan_digits(text, after))
}

/// `=.`, with whitespace allowed before the dot, but never when the dot
/// starts a number (`=.01` is Set then Number) or a `..` operator.
pub(crate) fn match_unset(text: &str, at: usize) -> Option<usize> {
    if !text[at..].starts_with('=') {
        return None;
    }
    let mut p = scan_while(text, at + 1, |c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    if !text[p..].starts_with('.') {
        return None;
    }
    p += 1;
    match text[p..].chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => None,
        _ => Some(p),
    }
}

/// The filename pattern: an optional quote, a run of path characters,
/// and the matching close quote. No escape processing.
pub(crate) fn match_filename(text: &str, at: usize) -> Option<usize> {
    fn is_filename_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '`' | '/' | '.' | '\\' | '!' | '-' | ':' | '_' | '$' | '*' | '~' | '?'
            )
    }

    let quoted = text[at..].starts_with('"');
    let body_start = at + usize::from(quoted);
    let body_end = scan_while(text, body_start, is_filename_char);
    if body_end == body_start {
        return None;
    }
    if quoted {
        if text[body_end..].starts_with('"') {
            Some(body_end + 1)
        } else {
            None
        }
    } else {
        Some(body_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_matching() {
        assert_eq!(match_number("1.5*^10", 0), Some(7));
        assert_eq!(match_number("8^^23*^2", 0), Some(8));
        assert_eq!(match_number("1..", 0), Some(1));
        assert_eq!(match_number("1.5``", 0), Some(4));
        assert_eq!(match_number(".", 0), None);
        assert_eq!(match_number("x1", 0), None);
    }

    #[test]
    fn unset_lookahead() {
        assert_eq!(match_unset("=.", 0), Some(2));
        assert_eq!(match_unset("= .", 0), Some(3));
        assert_eq!(match_unset("=.01", 0), None);
        assert_eq!(match_unset("= ..", 0), None);
    }

    #[test]
    fn symbol_segments() {
        let tables = CharacterTables::builtin();
        assert_eq!(match_symbol(tables, "context`name", 0), Some(12));
        assert_eq!(match_symbol(tables, "`name", 0), Some(5));
        assert_eq!(match_symbol(tables, "abc`", 0), Some(3));
        assert_eq!(match_symbol(tables, "9abc", 0), None);
    }

    #[test]
    fn pattern_shapes() {
        let tables = CharacterTables::builtin();
        assert_eq!(match_pattern(tables, "_", 0), Some(1));
        assert_eq!(match_pattern(tables, "x_", 0), Some(2));
        assert_eq!(match_pattern(tables, "x_.", 0), Some(3));
        assert_eq!(match_pattern(tables, "x__head", 0), Some(7));
        assert_eq!(match_pattern(tables, "x___head", 0), Some(8));
        assert_eq!(match_pattern(tables, "abc", 0), None);
    }

    #[test]
    fn filename_shapes() {
        assert_eq!(match_filename("b", 0), Some(1));
        assert_eq!(match_filename("dir/file.m", 0), Some(10));
        assert_eq!(match_filename("\"a file\"", 0), None); // space not allowed
        assert_eq!(match_filename("\"file.m\"", 0), Some(8));
        assert_eq!(match_filename("\"file.m", 0), None);
    }
}
