//! The CodeTokenize rendering of token streams.

use test_case::test_case;
use wolfram_scanner::{SingleLineFeeder, Tokeniser};

fn rendered(code: &str) -> Vec<String> {
    let mut feeder = SingleLineFeeder::new(code);
    let mut tokeniser = Tokeniser::new(&mut feeder);
    let mut out = Vec::new();
    loop {
        let token = tokeniser.next_token().expect("tokenization failed");
        if token.is_end() {
            return out;
        }
        out.push(token.code_tokenize_format());
    }
}

#[test_case("5!", &["LeafNode[Token`Number, '5', 0]", "LeafNode[Token`Bang, '!', 1]"])]
#[test_case("6!!", &["LeafNode[Token`Number, '6', 0]", "LeafNode[Token`BangBang, '!!', 1]"])]
#[test_case("?Plus", &["LeafNode[Token`Question, '?', 0]", "LeafNode[Symbol, 'Plus', 1]"])]
#[test_case("??Times", &["LeafNode[Token`QuestionQuestion, '??', 0]", "LeafNode[Symbol, 'Times', 2]"])]
#[test_case("x--", &["LeafNode[Symbol, 'x', 0]", "LeafNode[Token`MinusMinus, '--', 1]"])]
#[test_case("x!", &["LeafNode[Symbol, 'x', 0]", "LeafNode[Token`Bang, '!', 1]"])]
#[test_case("a > b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Greater, '>', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a < b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Less, '<', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a >> b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`GreaterGreater, '>>', 2]", "LeafNode[Token`Filename, 'b', 5]"])]
#[test_case("a << b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`LessLess, '<<', 2]", "LeafNode[Token`Filename, 'b', 5]"])]
#[test_case("a >= b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`GreaterEqual, '>=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a <= b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`LessEqual, '<=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a + b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Plus, '+', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a | b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Bar, '|', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a || b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`BarBar, '||', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a & b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Amp, '&', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a && b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`AmpAmp, '&&', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a / b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Slash, '/', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a /. b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`SlashDot, '/.', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a // b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`SlashSlash, '//', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a //. b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`SlashSlashDot, '//.', 2]", "LeafNode[Symbol, 'b', 6]"])]
#[test_case("a = b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`Equal, '=', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a == b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`EqualEqual, '==', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a === b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`EqualEqualEqual, '===', 2]", "LeafNode[Symbol, 'b', 6]"])]
#[test_case("a += b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`PlusEqual, '+=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a -= b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`MinusEqual, '-=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a *= b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`StarEqual, '*=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a /= b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`SlashEqual, '/=', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a @ b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`At, '@', 2]", "LeafNode[Symbol, 'b', 4]"])]
#[test_case("a @@ b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`AtAt, '@@', 2]", "LeafNode[Symbol, 'b', 5]"])]
#[test_case("a @@@ b", &["LeafNode[Symbol, 'a', 0]", "LeafNode[Token`AtAtAt, '@@@', 2]", "LeafNode[Symbol, 'b', 6]"])]
fn code_tokenize_rendering(code: &str, expected: &[&str]) {
    assert_eq!(rendered(code), expected);
}

#[test]
fn unmapped_tags_keep_their_names() {
    assert_eq!(
        rendered("a \u{222b} b"),
        [
            "LeafNode[Symbol, 'a', 0]",
            "LeafNode[Token`Integral, '\u{222b}', 2]",
            "LeafNode[Symbol, 'b', 6]",
        ]
    );
}
