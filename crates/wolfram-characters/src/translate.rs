//! Longest-match text replacement.
//!
//! The translation tables map code points (occasionally short strings) to
//! replacement strings. Input is scanned left to right; at each position
//! the longest matching key wins, ties broken by lexicographic order of
//! the key. Replacements are not re-scanned.

use ahash::AHashMap;

#[derive(Debug, Default)]
pub(crate) struct Translator {
    /// Replacement pairs, sorted by key length descending then key
    /// ascending. Candidate order for a position is fixed by this sort.
    entries: Vec<(String, String)>,
    /// Index of candidate entries by leading character.
    by_first: AHashMap<char, Vec<usize>>,
}

impl Translator {
    pub(crate) fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(key, value)| key != value && !key.is_empty())
            .collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup_by(|a, b| a.0 == b.0);

        let mut by_first: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (index, (key, _)) in entries.iter().enumerate() {
            let first = key.chars().next().expect("empty keys are filtered out");
            by_first.entry(first).or_default().push(index);
        }

        Self { entries, by_first }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replacement for `key`, if the exact key is present.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Rewrite `input`, replacing every match.
    pub(crate) fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(c) = rest.chars().next() {
            let matched = self
                .by_first
                .get(&c)
                .and_then(|candidates| {
                    candidates
                        .iter()
                        .find(|&&index| rest.starts_with(self.entries[index].0.as_str()))
                })
                .copied();

            match matched {
                Some(index) => {
                    let (key, value) = &self.entries[index];
                    out.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::Translator;

    fn pairs(raw: &[(&str, &str)]) -> Translator {
        Translator::new(
            raw.iter()
                .map(|(k, v)| (String::from(*k), String::from(*v))),
        )
    }

    #[test]
    fn longest_key_wins() {
        let t = pairs(&[("ab", "1"), ("abc", "2"), ("a", "3")]);
        assert_eq!(t.apply("abcaba"), "213");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        let t = pairs(&[("a", "b"), ("b", "c")]);
        assert_eq!(t.apply("ab"), "bc");
    }

    #[test]
    fn identity_pairs_are_dropped() {
        let t = pairs(&[("x", "x"), ("y", "z")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.apply("xy"), "xz");
    }

    #[test]
    fn unmatched_text_is_copied() {
        let t = pairs(&[("\u{f74c}", "\u{2146}")]);
        assert_eq!(t.apply("d x \u{f74c}y"), "d x \u{2146}y");
        assert_eq!(t.get("\u{f74c}"), Some("\u{2146}"));
        assert_eq!(t.get("d"), None);
    }
}
