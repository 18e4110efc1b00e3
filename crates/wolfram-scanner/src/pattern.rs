//! The operator pattern set and its per-character dispatch index.
//!
//! Dispatch is a two-level affair. Each ASCII character maps to an
//! ordered list of candidates, most specific first, so `===` wins over
//! `==` wins over `=`. Non-ASCII characters index a second table holding
//! the literal spellings contributed by the character tables. The
//! assembled set is immutable and shared by every tokenizer built over
//! the same tables.

use ahash::AHashMap;
use tracing::warn;
use wolfram_characters::CharacterTables;

use crate::token::TokenKind;

/// A hand-written sub-scanner, for token shapes a literal cannot match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scanner {
    Number,
    StringLit,
    Pattern,
    Symbol,
    Slot,
    SlotSequence,
    Out,
    Unset,
}

/// One candidate for a leading character.
#[derive(Debug, Clone)]
pub(crate) enum Candidate {
    /// A fixed literal.
    Lit(TokenKind, &'static str),
    /// A literal contributed by the character tables.
    Table(TokenKind, String),
    /// A sub-scanner.
    Scan(Scanner),
}

/// The assembled pattern set.
#[derive(Debug)]
pub struct TokenTable {
    ascii: AHashMap<char, Vec<Candidate>>,
    unicode: AHashMap<char, Vec<(TokenKind, String)>>,
}

impl TokenTable {
    /// Assemble the pattern set for one character-table version.
    #[must_use]
    pub fn new(tables: &CharacterTables) -> Self {
        let mut ascii = fixed_candidates();

        // The box-input digraphs come ahead of the bare backslash so
        // `\(` is LeftRowBox, not RawBackslash followed by junk.
        let mut backslash: Vec<Candidate> = tables
            .box_operators()
            .filter_map(|(name, spelling)| match TokenKind::from_name(name) {
                Some(kind) => Some(Candidate::Table(kind, spelling.to_owned())),
                None => {
                    warn!(name, "box operator is not a known token tag");
                    None
                }
            })
            .collect();
        backslash.push(Candidate::Lit(TokenKind::RawBackslash, "\\"));
        ascii.insert('\\', backslash);

        let mut unicode: AHashMap<char, Vec<(TokenKind, String)>> = AHashMap::new();
        for (name, spelling) in tables.operator_unicode_iter() {
            let Some(kind) = TokenKind::from_name(name) else {
                warn!(name, "operator is not a known token tag");
                continue;
            };
            let Some(first) = spelling.chars().next() else {
                continue;
            };
            if first.is_ascii() {
                // ASCII spellings are covered by the fixed table.
                continue;
            }
            unicode
                .entry(first)
                .or_default()
                .push((kind, spelling.to_owned()));
        }
        for candidates in unicode.values_mut() {
            // Longest first; ties keep table order.
            candidates.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));
        }

        Self { ascii, unicode }
    }

    pub(crate) fn candidates(&self, c: char) -> Option<&[Candidate]> {
        self.ascii.get(&c).map(Vec::as_slice)
    }

    pub(crate) fn unicode_literals(&self, c: char) -> Option<&[(TokenKind, String)]> {
        self.unicode.get(&c).map(Vec::as_slice)
    }
}

/// The fixed ASCII candidate lists.
fn fixed_candidates() -> AHashMap<char, Vec<Candidate>> {
    use Candidate::{Lit, Scan};
    use TokenKind::*;

    let mut table = AHashMap::new();
    let mut put = |c: char, candidates: Vec<Candidate>| {
        table.insert(c, candidates);
    };

    put('!', vec![Lit(Unequal, "!="), Lit(Factorial2, "!!"), Lit(Factorial, "!")]);
    put('"', vec![Scan(Scanner::StringLit)]);
    put('#', vec![Scan(Scanner::SlotSequence), Scan(Scanner::Slot)]);
    put('%', vec![Scan(Scanner::Out)]);
    put('&', vec![Lit(And, "&&"), Lit(Function, "&")]);
    put('\'', vec![Lit(Derivative, "'")]);
    put('(', vec![Lit(RawLeftParenthesis, "(")]);
    put(')', vec![Lit(RawRightParenthesis, ")")]);
    put('*', vec![Lit(NonCommutativeMultiply, "**"), Lit(TimesBy, "*="), Lit(Times, "*")]);
    put('+', vec![Lit(Increment, "++"), Lit(AddTo, "+="), Lit(Plus, "+")]);
    put(',', vec![Lit(RawComma, ",")]);
    put('-', vec![Lit(Decrement, "--"), Lit(SubtractFrom, "-="), Lit(Rule, "->"), Lit(Minus, "-")]);
    put('.', vec![Scan(Scanner::Number), Lit(RepeatedNull, "..."), Lit(Repeated, ".."), Lit(Dot, ".")]);
    put(
        '/',
        vec![
            Lit(MapAll, "//@"),
            Lit(Map, "/@"),
            Lit(DivideBy, "/="),
            Lit(ReplaceRepeated, "//."),
            Lit(ReplaceAll, "/."),
            Lit(RightComposition, "/*"),
            Lit(Postfix, "//"),
            Lit(TagSet, "/:"),
            Lit(Condition, "/;"),
            Lit(Divide, "/"),
        ],
    );
    put(
        ':',
        vec![Lit(MessageName, "::"), Lit(RuleDelayed, ":>"), Lit(SetDelayed, ":="), Lit(RawColon, ":")],
    );
    put(';', vec![Lit(Span, ";;"), Lit(Semicolon, ";")]);
    put(
        '<',
        vec![
            Lit(RawLeftAssociation, "<|"),
            Lit(UndirectedEdge, "<->"),
            Lit(Get, "<<"),
            Lit(StringJoin, "<>"),
            Lit(LessEqual, "<="),
            Lit(Less, "<"),
        ],
    );
    put(
        '=',
        vec![
            Lit(SameQ, "==="),
            Lit(UnsameQ, "=!="),
            Lit(Equal, "=="),
            Scan(Scanner::Unset),
            Lit(Set, "="),
        ],
    );
    put('>', vec![Lit(PutAppend, ">>>"), Lit(Put, ">>"), Lit(GreaterEqual, ">="), Lit(Greater, ">")]);
    put('?', vec![Lit(Information, "??"), Lit(PatternTest, "?")]);
    put('@', vec![Lit(ApplyList, "@@@"), Lit(Apply, "@@"), Lit(Composition, "@*"), Lit(Prefix, "@")]);
    put('[', vec![Lit(RawLeftBracket, "[")]);
    put(']', vec![Lit(RawRightBracket, "]")]);
    put('^', vec![Lit(UpSetDelayed, "^:="), Lit(UpSet, "^="), Lit(Power, "^")]);
    put('_', vec![Scan(Scanner::Pattern)]);
    put('`', vec![Scan(Scanner::Pattern), Scan(Scanner::Symbol)]);
    put('{', vec![Lit(RawLeftBrace, "{")]);
    put('|', vec![Lit(RawRightAssociation, "|>"), Lit(Or, "||"), Lit(Alternatives, "|")]);
    put('}', vec![Lit(RawRightBrace, "}")]);
    put('~', vec![Lit(StringExpression, "~~"), Lit(Infix, "~")]);

    for c in ('a'..='z').chain('A'..='Z').chain(['$']) {
        put(c, vec![Scan(Scanner::Pattern), Scan(Scanner::Symbol)]);
    }
    for c in '0'..='9' {
        put(c, vec![Scan(Scanner::Number)]);
    }

    table
}
