//! The fixed letter alphabet of Wolfram Language symbols.

/// Is `c` a letter as far as symbol names are concerned?
///
/// This is the fixed alphabet of the language: ASCII letters, the accented
/// Latin letters WL supports, Greek (including the archaic and variant
/// forms), the double-struck/script/Gothic letters of the Letterlike
/// Symbols block, and the private-use blocks WL assigns to formal and
/// script letters. Letter-*like* characters are a separate, table-driven
/// set; see [`CharacterTables::is_letterlike`](crate::CharacterTables::is_letterlike).
#[must_use]
pub fn is_wl_letter(c: char) -> bool {
    matches!(c,
        'a'..='z' | 'A'..='Z'
        | '\u{00c0}'..='\u{00d6}' | '\u{00d8}'..='\u{00f6}' | '\u{00f8}'..='\u{0103}'
        | '\u{0106}' | '\u{0107}' | '\u{010c}'..='\u{010f}' | '\u{0112}'..='\u{0115}'
        | '\u{011a}'..='\u{012d}' | '\u{0131}' | '\u{0141}' | '\u{0142}'
        | '\u{0147}' | '\u{0148}' | '\u{0150}'..='\u{0153}' | '\u{0158}'..='\u{0161}'
        | '\u{0164}' | '\u{0165}' | '\u{016e}'..='\u{0171}' | '\u{017d}' | '\u{017e}'
        | '\u{0391}'..='\u{03a1}' | '\u{03a3}'..='\u{03a9}' | '\u{03b1}'..='\u{03c9}'
        | '\u{03d1}' | '\u{03d2}' | '\u{03d5}' | '\u{03d6}' | '\u{03da}'..='\u{03e1}'
        | '\u{03f0}' | '\u{03f1}' | '\u{03f5}'
        | '\u{210a}'..='\u{210c}' | '\u{2110}'..='\u{2113}' | '\u{211b}' | '\u{211c}'
        | '\u{2128}' | '\u{212c}' | '\u{212d}' | '\u{212f}'..='\u{2131}'
        | '\u{2133}'..='\u{2138}'
        | '\u{f6b2}'..='\u{f6b5}' | '\u{f6b7}' | '\u{f6b9}' | '\u{f6ba}'..='\u{f6bc}'
        | '\u{f6be}' | '\u{f6bf}' | '\u{f6c1}'..='\u{f700}' | '\u{f730}' | '\u{f731}'
        | '\u{f770}' | '\u{f772}' | '\u{f773}' | '\u{f776}' | '\u{f779}' | '\u{f77a}'
        | '\u{f77d}'..='\u{f780}' | '\u{f782}'..='\u{f78b}' | '\u{f78d}'..='\u{f78f}'
        | '\u{f790}' | '\u{f793}'..='\u{f79a}' | '\u{f79c}'..='\u{f7a2}'
        | '\u{f7a4}'..='\u{f7bd}' | '\u{f800}'..='\u{f833}' | '\u{fb01}' | '\u{fb02}'
    )
}

#[cfg(test)]
mod tests {
    use super::is_wl_letter;

    #[test]
    fn ascii_letters() {
        assert!(is_wl_letter('a'));
        assert!(is_wl_letter('Z'));
        assert!(!is_wl_letter('0'));
        assert!(!is_wl_letter('$'));
        assert!(!is_wl_letter('_'));
    }

    #[test]
    fn greek_letters() {
        assert!(is_wl_letter('\u{03b8}')); // theta
        assert!(is_wl_letter('\u{03bc}')); // mu
        assert!(is_wl_letter('\u{03a9}')); // capital omega
        assert!(!is_wl_letter('\u{03a2}')); // gap in the capital range
    }

    #[test]
    fn letterlike_symbols_block() {
        assert!(is_wl_letter('\u{2113}')); // script l
        assert!(is_wl_letter('\u{211c}')); // Gothic capital R
        assert!(!is_wl_letter('\u{221e}')); // infinity is letter-like, not a letter
    }
}
