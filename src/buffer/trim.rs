use tracing::debug;

use super::TextBuilder;
use crate::{Error, Result};

impl TextBuilder {
    /// Remove `suffix` if the content ends with it. Returns whether it did.
    pub fn trim(&mut self, suffix: &str) -> bool {
        if suffix.is_empty() || !self.current_content().ends_with(suffix) {
            return false;
        }
        let len = self.len() - suffix.len();
        self.store.truncate(len);
        true
    }

    /// Remove the longest trailing run of characters found in `set`.
    /// Returns the number of bytes removed.
    pub fn trim_chars(&mut self, set: &str) -> usize {
        let content = self.current_content();
        let kept = content.trim_end_matches(|ch| set.contains(ch)).len();
        let removed = content.len() - kept;
        self.store.truncate(kept);
        removed
    }

    /// Remove exactly the last `len` bytes.
    ///
    /// Asking for more than the builder holds, or for a cut inside a
    /// multi-byte character, is rejected and nothing is removed.
    pub fn trim_len(&mut self, len: usize) -> Result<()> {
        let current = self.len();
        if len > current {
            debug!(requested = len, len = current, "trim length out of range");
            return Err(Error::TrimOutOfRange {
                requested: len,
                len: current,
            });
        }
        let offset = current - len;
        if !self.current_content().is_char_boundary(offset) {
            return Err(Error::CharBoundary { offset });
        }
        self.store.truncate(offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(content: &str) -> TextBuilder {
        let mut buf = TextBuilder::new();
        buf.add(content).unwrap();
        buf
    }

    #[rstest::rstest]
    #[case("hello, world!", "!", true, "hello, world")]
    #[case("hello, world!", "world!", true, "hello, ")]
    #[case("hello, world!", "?", false, "hello, world!")]
    #[case("hello, world!", "", false, "hello, world!")]
    #[case("hi", "ohhi", false, "hi")]
    #[case("a,b,", ",", true, "a,b")]
    fn test_trim(
        #[case] content: &str,
        #[case] suffix: &str,
        #[case] trimmed: bool,
        #[case] expected: &str,
    ) {
        let mut buf = builder(content);
        assert_eq!(buf.trim(suffix), trimmed);
        assert_eq!(buf.current_content(), expected);
    }

    #[rstest::rstest]
    fn test_trim_chars() {
        let mut buf = builder("a, b,\n \n");
        assert_eq!(buf.trim_chars(" \n"), 3);
        assert_eq!(buf.current_content(), "a, b,");
        assert_eq!(buf.trim_chars(",;"), 1);
        assert_eq!(buf.current_content(), "a, b");
        assert_eq!(buf.trim_chars("xyz"), 0);
        assert_eq!(buf.current_content(), "a, b");
    }

    #[rstest::rstest]
    fn test_trim_chars_multibyte() {
        let mut buf = builder("naïveéé");
        assert_eq!(buf.trim_chars("é"), 4);
        assert_eq!(buf.current_content(), "naïve");
    }

    #[rstest::rstest]
    fn test_trim_chars_can_empty() {
        let mut buf = builder("...");
        assert_eq!(buf.trim_chars("."), 3);
        assert!(buf.is_empty());
    }

    #[rstest::rstest]
    fn test_trim_len() {
        let mut buf = builder("abcdef");
        buf.trim_len(2).unwrap();
        assert_eq!(buf.current_content(), "abcd");
        buf.trim_len(0).unwrap();
        assert_eq!(buf.current_content(), "abcd");
        buf.trim_len(4).unwrap();
        assert!(buf.is_empty());
    }

    #[rstest::rstest]
    fn test_trim_len_out_of_range() {
        let mut buf = builder("abc");
        let err = buf.trim_len(4).unwrap_err();
        assert!(matches!(err, Error::TrimOutOfRange { requested: 4, len: 3 }));
        assert_eq!(buf.current_content(), "abc");
    }

    #[rstest::rstest]
    fn test_trim_len_char_boundary() {
        let mut buf = builder("caf\u{e9}");
        let err = buf.trim_len(1).unwrap_err();
        assert!(matches!(err, Error::CharBoundary { offset: 4 }));
        buf.trim_len(2).unwrap();
        assert_eq!(buf.current_content(), "caf");
    }

    #[rstest::rstest]
    fn test_trim_then_indent() {
        let mut buf = TextBuilder::new();
        buf.set_indent(2);
        buf.add("a\nb").unwrap();
        assert!(buf.trim("b"));
        buf.add("c").unwrap();
        assert_eq!(buf.current_content(), "a\n  c");
    }
}
