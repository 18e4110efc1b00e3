use test_case::test_case;
use wolfram_characters::{Affix, CharacterTables};

#[test]
fn builtin_tables_load() {
    let tables = CharacterTables::builtin();
    assert!(tables.named_character_count() > 200);
    assert!(tables.letterlike_count() <= tables.named_character_count());
}

#[test_case("Theta", '\u{03b8}')]
#[test_case("CapitalPi", '\u{03a0}')]
#[test_case("Mu", '\u{03bc}')]
#[test_case("Conjugate", '\u{f3c8}')]
#[test_case("Integral", '\u{222b}')]
#[test_case("Backslash", '\u{2216}')]
#[test_case("Rule", '\u{f522}')]
#[test_case("Infinity", '\u{221e}')]
#[test_case("RawDot", '.')]
fn named_characters_resolve(name: &str, expected: char) {
    assert_eq!(CharacterTables::builtin().named_character(name), Some(expected));
}

#[test]
fn unknown_names_do_not_resolve() {
    let tables = CharacterTables::builtin();
    assert_eq!(tables.named_character("Fake"), None);
    assert_eq!(tables.named_character("theta"), None);
}

#[test]
fn letterlikes_are_table_driven() {
    let tables = CharacterTables::builtin();
    assert!(tables.is_letterlike('\u{221e}')); // Infinity
    assert!(tables.is_letterlike('\u{210f}')); // HBar
    assert!(tables.is_letterlike('\u{03b8}')); // Theta
    assert!(!tables.is_letterlike('\u{222b}')); // Integral is an operator
    assert!(!tables.is_letterlike('x')); // plain letters are not listed
}

/// Every character with a defined inverse must survive the WL → Unicode →
/// WL round trip.
#[test_case('\u{f51f}' ; "rule delayed")]
#[test_case('\u{f431}' ; "equal")]
#[test_case('\u{f74c}' ; "differential d")]
#[test_case('\u{f4a0}' ; "cross")]
#[test_case('\u{f523}' ; "implies")]
#[test_case('\u{f432}' ; "vertical separator")]
#[test_case('\u{29df}' ; "undirected edge")]
fn unicode_inverse_round_trips(wl: char) {
    let tables = CharacterTables::builtin();
    let public = tables.replace_wl_with_plain_text(&wl.to_string(), true);
    assert_ne!(public, wl.to_string(), "translation must not be redundant");
    assert_eq!(tables.replace_unicode_with_wl(&public), wl.to_string());
}

#[test]
fn wl_to_unicode_replaces_private_use_characters() {
    let tables = CharacterTables::builtin();
    assert_eq!(
        tables.replace_wl_with_plain_text("x\u{f74c}y", true),
        "x\u{2146}y"
    );
    assert_eq!(
        tables.replace_wl_with_plain_text("a \u{f522} b", true),
        "a \u{2192} b"
    );
}

#[test]
fn wl_to_ascii_prefers_ascii_spellings() {
    let tables = CharacterTables::builtin();
    assert_eq!(tables.replace_wl_with_plain_text("\u{00d7}", false), "*");
    assert_eq!(tables.replace_wl_with_plain_text("\u{2260}", false), "!=");
    assert_eq!(
        tables.replace_wl_with_plain_text("\u{f74c}", false),
        "\\[DifferentialD]"
    );
}

#[test]
fn plain_text_leaves_ordinary_text_alone() {
    let tables = CharacterTables::builtin();
    assert_eq!(tables.replace_wl_with_plain_text("f[x_] := x + 1", true), "f[x_] := x + 1");
    assert_eq!(tables.replace_unicode_with_wl("plain ascii"), "plain ascii");
}

#[test_case("q", '\u{03b8}')]
#[test_case("int", '\u{222b}')]
#[test_case("->", '\u{f522}')]
#[test_case("deg", '\u{00b0}')]
fn esc_aliases_resolve(alias: &str, expected: char) {
    assert_eq!(CharacterTables::builtin().aliased_character(alias), Some(expected));
}

#[test]
fn operator_records_expose_parser_attributes() {
    let tables = CharacterTables::builtin();
    assert_eq!(tables.operator_precedence("Plus"), Some(310));
    assert_eq!(tables.operator_precedence("Power"), Some(590));
    assert_eq!(tables.operator_precedence("NoSuchOperator"), None);

    let times = tables.operator("Times").unwrap();
    assert!(times.meaningful);
    assert_eq!(times.arity, 2);
    assert_eq!(times.affix, Affix::Infix);

    let factorial = tables.operator("Factorial").unwrap();
    assert_eq!(factorial.affix, Affix::Postfix);
    assert_eq!(factorial.arity, 1);
}

#[test]
fn no_meaning_operators_are_flagged() {
    let tables = CharacterTables::builtin();
    assert!(tables.is_no_meaning_operator("Backslash"));
    assert!(tables.is_no_meaning_operator("Wedge"));
    assert!(tables.is_no_meaning_operator("Therefore"));
    assert!(!tables.is_no_meaning_operator("Integral"));
    assert!(!tables.is_no_meaning_operator("Plus"));
}

#[test]
fn box_operators_and_suffixes() {
    let tables = CharacterTables::builtin();
    let boxes: Vec<(&str, &str)> = tables.box_operators().collect();
    assert!(boxes.contains(&("LeftRowBox", "\\(")));
    assert!(boxes.contains(&("SuperscriptBox", "\\^")));
    assert!(boxes.contains(&("FormBox", "\\`")));

    for c in ['(', ')', '*', '^', '_', '&', '+', '%', '/', '@', '`', '!'] {
        assert!(tables.is_boxing_suffix(c), "{c:?} should be a boxing suffix");
    }
    assert!(!tables.is_boxing_suffix('"'));
    assert!(!tables.is_boxing_suffix('n'));
}

#[test]
fn operator_unicode_iter_covers_private_spellings() {
    let tables = CharacterTables::builtin();
    let spellings: Vec<(&str, &str)> = tables.operator_unicode_iter().collect();
    assert!(spellings.contains(&("Integral", "\u{222b}")));
    assert!(spellings.contains(&("Rule", "\u{f522}")));
    assert!(spellings.contains(&("Times", "\u{00d7}")));
    // Equal accepts both of its private-use spellings.
    assert!(spellings.contains(&("Equal", "\u{f431}")));
    assert!(spellings.contains(&("Equal", "\u{f7d9}")));
}
