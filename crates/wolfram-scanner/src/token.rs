//! The token model.

use std::fmt;

macro_rules! token_kinds {
    ($($name:ident,)*) => {
        /// The tag of a token.
        ///
        /// A closed enumeration: the structural kinds, the raw bracketing
        /// characters, and every operator the character tables know. The
        /// exact operator set is fixed per character-table version.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $($name,)*
        }

        impl TokenKind {
            /// The tag name, as spelled in the operator tables.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TokenKind::$name => stringify!($name),)*
                }
            }

            /// Reverse lookup from an operator-table name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(TokenKind::$name),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    // Structural kinds.
    End,
    Symbol,
    Number,
    String,
    Filename,
    Pattern,
    Slot,
    SlotSequence,
    Out,

    // Raw bracketing and separator characters.
    RawLeftBracket,
    RawRightBracket,
    RawLeftBrace,
    RawRightBrace,
    RawLeftParenthesis,
    RawRightParenthesis,
    RawLeftAssociation,
    RawRightAssociation,
    RawComma,
    RawColon,
    RawBackslash,

    // ASCII operators.
    Definition,
    Information,
    PatternTest,
    Increment,
    Decrement,
    MapAll,
    Map,
    ApplyList,
    Apply,
    Composition,
    RightComposition,
    Prefix,
    Postfix,
    Infix,
    StringExpression,
    StringJoin,
    Derivative,
    NonCommutativeMultiply,
    AddTo,
    SubtractFrom,
    TimesBy,
    DivideBy,
    Times,
    Divide,
    Plus,
    Minus,
    SameQ,
    UnsameQ,
    Equal,
    Unequal,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    LessSlantEqual,
    GreaterSlantEqual,
    Or,
    And,
    Not,
    RepeatedNull,
    Repeated,
    Alternatives,
    Rule,
    RuleDelayed,
    ReplaceRepeated,
    ReplaceAll,
    UpSetDelayed,
    SetDelayed,
    UpSet,
    TagSet,
    Unset,
    Set,
    Condition,
    Semicolon,
    Span,
    MessageName,
    Power,
    Dot,
    Factorial2,
    Factorial,
    Function,
    Get,
    Put,
    PutAppend,
    DirectedEdge,
    UndirectedEdge,

    // Box-input operators.
    LeftRowBox,
    RightRowBox,
    InterpretedBox,
    SuperscriptBox,
    SubscriptBox,
    OverscriptBox,
    UnderscriptBox,
    OtherscriptBox,
    FractionBox,
    SqrtBox,
    RadicalBox,
    FormBox,
    BoxInputEscape,

    // Operators with only non-ASCII spellings.
    Cross,
    Transpose,
    Conjugate,
    ConjugateTranspose,
    HermitianConjugate,
    Integral,
    DifferentialD,
    Del,
    Square,
    Colon,
    SmallCircle,
    CircleDot,
    PlusMinus,
    MinusPlus,
    Nor,
    Nand,
    Xor,
    Xnor,
    Implies,
    Equivalent,
    Element,
    NotElement,
    ForAll,
    Exists,
    NotExists,
    Union,
    Intersection,
    Subset,
    Superset,
    Diamond,
    Wedge,
    Vee,
    CircleTimes,
    CenterDot,
    Star,
    VerticalTilde,
    Coproduct,
    Cap,
    Cup,
    CirclePlus,
    CircleMinus,
    VerticalBar,
    NotVerticalBar,
    DoubleVerticalBar,
    NotDoubleVerticalBar,
    RightTee,
    DoubleRightTee,
    LeftTee,
    DoubleLeftTee,
    SuchThat,
    VerticalSeparator,
    Therefore,
    Because,
    Backslash,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token: a tag, the token text, and the byte offset of the token
/// start in the logical source buffer.
///
/// For most tokens the text is the exact source substring. `String` and
/// `Symbol` tokens carry the reconstructed text with numeric and named
/// escape sequences expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Is this the terminal token?
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    /// Render this token the way CodeTokenize prints leaf nodes, e.g.
    /// `LeafNode[Token`Bang, '!', 1]`.
    #[must_use]
    pub fn code_tokenize_format(&self) -> String {
        match self.kind {
            TokenKind::Symbol => format!("LeafNode[Symbol, '{}', {}]", self.text, self.pos),
            kind => format!(
                "LeafNode[Token`{}, '{}', {}]",
                code_tokenize_tag(kind),
                self.text,
                self.pos
            ),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {:?}, {})", self.kind, self.text, self.pos)
    }
}

/// The CodeTokenize name of an internal tag. Tags without an entry keep
/// their internal name.
fn code_tokenize_tag(kind: TokenKind) -> &'static str {
    use TokenKind::*;

    match kind {
        Factorial => "Bang",
        Factorial2 => "BangBang",
        Unequal => "BangEqual",
        PatternTest => "Question",
        Information => "QuestionQuestion",
        Increment => "PlusPlus",
        Decrement => "MinusMinus",
        AddTo => "PlusEqual",
        SubtractFrom => "MinusEqual",
        TimesBy => "StarEqual",
        DivideBy => "SlashEqual",
        Times => "Star",
        Divide => "Slash",
        ReplaceAll => "SlashDot",
        ReplaceRepeated => "SlashSlashDot",
        Postfix => "SlashSlash",
        Map => "SlashAt",
        MapAll => "SlashSlashAt",
        TagSet => "SlashColon",
        Condition => "SlashSemi",
        RightComposition => "SlashStar",
        Prefix => "At",
        Apply => "AtAt",
        ApplyList => "AtAtAt",
        Composition => "AtStar",
        Set => "Equal",
        Equal => "EqualEqual",
        SameQ => "EqualEqualEqual",
        UnsameQ => "EqualBangEqual",
        Unset => "EqualDot",
        SetDelayed => "ColonEqual",
        RuleDelayed => "ColonGreater",
        MessageName => "ColonColon",
        RawColon => "Colon",
        Rule => "MinusGreater",
        Function => "Amp",
        And => "AmpAmp",
        Alternatives => "Bar",
        Or => "BarBar",
        Less => "Less",
        Greater => "Greater",
        Get => "LessLess",
        Put => "GreaterGreater",
        PutAppend => "GreaterGreaterGreater",
        StringJoin => "LessGreater",
        UndirectedEdge => "LessMinusGreater",
        NonCommutativeMultiply => "StarStar",
        Power => "Caret",
        UpSet => "CaretEqual",
        UpSetDelayed => "CaretColonEqual",
        Semicolon => "Semi",
        Span => "SemiSemi",
        Infix => "Tilde",
        StringExpression => "TildeTilde",
        Derivative => "SingleQuote",
        RawComma => "Comma",
        RawLeftBrace => "OpenCurly",
        RawRightBrace => "CloseCurly",
        RawLeftBracket => "OpenSquare",
        RawRightBracket => "CloseSquare",
        RawLeftParenthesis => "OpenParen",
        RawRightParenthesis => "CloseParen",
        RawLeftAssociation => "LessBar",
        RawRightAssociation => "BarGreater",
        other => other.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Token, TokenKind};

    #[test]
    fn kind_names_round_trip() {
        for kind in [
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::RawLeftAssociation,
            TokenKind::UpSetDelayed,
            TokenKind::SqrtBox,
            TokenKind::NotDoubleVerticalBar,
        ] {
            assert_eq!(TokenKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(TokenKind::from_name("NotAKind"), None);
    }

    #[test]
    fn tokens_compare_componentwise() {
        assert_eq!(
            Token::new(TokenKind::Set, "=", 2),
            Token::new(TokenKind::Set, "=", 2)
        );
        assert_ne!(
            Token::new(TokenKind::Set, "=", 2),
            Token::new(TokenKind::Set, "=", 3)
        );
    }

    #[test]
    fn display_matches_the_reference_shape() {
        let token = Token::new(TokenKind::Postfix, "//", 2);
        assert_eq!(token.to_string(), "Token(Postfix, \"//\", 2)");
    }
}
