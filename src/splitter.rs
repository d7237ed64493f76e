//! Concrete regex split back-ends.
//!
//! Two splitters over the same pattern language: `CharSplitter` works on
//! UTF-8 text, `ByteSplitter` on raw bytes. Both treat the pattern as a
//! separator and keep empty fields, so adjacent separators and a leading
//! or trailing separator all surface as empty entries.

use regex::bytes;
use regex::Regex;

/// Character-string back-end.
#[derive(Debug, Clone)]
pub struct CharSplitter {
    re: Regex,
}

impl CharSplitter {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self { re: Regex::new(pattern)? })
    }

    pub fn split(&self, input: &str) -> Vec<String> {
        self.re.split(input).map(str::to_string).collect()
    }

    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }
}

/// Byte-oriented back-end. Operates on the raw encoding, so it also
/// accepts input that is not valid UTF-8.
#[derive(Debug, Clone)]
pub struct ByteSplitter {
    re: bytes::Regex,
}

impl ByteSplitter {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self { re: bytes::Regex::new(pattern)? })
    }

    pub fn split(&self, input: &[u8]) -> Vec<Vec<u8>> {
        self.re.split(input).map(<[u8]>::to_vec).collect()
    }

    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_split_keeps_empty_fields() {
        let s = CharSplitter::new(",").expect("compiles");
        assert_eq!(s.split("a,b,,c"), vec!["a", "b", "", "c"]);
        assert_eq!(s.split(",a,"), vec!["", "a", ""]);
        assert_eq!(s.split(""), vec![""]);
    }

    #[test]
    fn char_split_patterns_are_regexes_not_literals() {
        let s = CharSplitter::new(r"\s+").expect("compiles");
        assert_eq!(s.split("one  two\tthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn char_split_handles_multibyte_text() {
        let s = CharSplitter::new(":").expect("compiles");
        assert_eq!(s.split("müller:bücher"), vec!["müller", "bücher"]);
    }

    #[test]
    fn byte_split_matches_char_split_on_utf8() {
        let c = CharSplitter::new(",").expect("compiles");
        let b = ByteSplitter::new(",").expect("compiles");
        let text = "müller,bücher,,x";
        let from_bytes: Vec<String> = b
            .split(text.as_bytes())
            .into_iter()
            .map(|p| String::from_utf8(p).expect("utf8 pieces"))
            .collect();
        assert_eq!(from_bytes, c.split(text));
    }

    #[test]
    fn byte_split_accepts_non_utf8_input() {
        let b = ByteSplitter::new(",").expect("compiles");
        let pieces = b.split(b"a\xFF,b");
        assert_eq!(pieces, vec![b"a\xFF".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn invalid_patterns_are_rejected_by_both_backends() {
        assert!(CharSplitter::new("(").is_err());
        assert!(ByteSplitter::new("(").is_err());
    }

    #[test]
    fn pattern_is_kept_verbatim() {
        let s = CharSplitter::new(r"\d+").expect("compiles");
        assert_eq!(s.pattern(), r"\d+");
        let b = ByteSplitter::new(r"\d+").expect("compiles");
        assert_eq!(b.pattern(), r"\d+");
    }
}
