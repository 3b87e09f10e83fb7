//! Escaping strategies for embedding arbitrary text into generated markup,
//! queries, command lines and addresses.
//!
//! Every strategy is a pure function of its input and comes in two shapes:
//! `escape_*` allocates a fresh `String`, `escape_*_into` appends to a caller
//! buffer. None of them validate the surrounding syntax.

mod template;

use std::iter;

use memchr::memchr_iter;
use smallvec::SmallVec;

use crate::constants::{is_shell_special, is_uri_unreserved, REGEX_SPECIAL, SEXPR_SPECIAL};

pub use template::Template;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Escape character plus the characters it protects.
///
/// The escape character always belongs to the set, so output produced with a
/// given set can be unescaped unambiguously. Each character is escaped exactly
/// once, even when the caller lists the escape character itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSet {
    escape: char,
    chars: SmallVec<[char; 16]>,
}

impl EscapeSet {
    pub fn new(escape: char, toescape: &str) -> Self {
        let mut chars: SmallVec<[char; 16]> = SmallVec::new();
        for ch in toescape.chars().chain(iter::once(escape)) {
            if !chars.contains(&ch) {
                chars.push(ch);
            }
        }
        Self { escape, chars }
    }

    #[inline]
    pub fn escape_char(&self) -> char {
        self.escape
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn escape(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        self.escape_into(&mut out, s);
        out
    }

    pub fn escape_into(&self, out: &mut String, s: &str) {
        let mut start = 0;
        for (idx, ch) in s.char_indices() {
            if !self.contains(ch) {
                continue;
            }
            out.push_str(&s[start..idx]);
            out.push(self.escape);
            out.push(ch);
            start = idx + ch.len_utf8();
        }
        out.push_str(&s[start..]);
    }
}

/// Target syntax selector for [`EscapeContext::escape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeContext {
    Chars(EscapeSet),
    Quoted,
    Xml,
    Sexpr,
    Regex,
    Sql,
    Shell,
    Uri,
}

impl EscapeContext {
    pub fn escape(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        self.escape_into(&mut out, s);
        out
    }

    pub fn escape_into(&self, out: &mut String, s: &str) {
        match self {
            EscapeContext::Chars(set) => set.escape_into(out, s),
            EscapeContext::Quoted => escape_quoted_into(out, s),
            EscapeContext::Xml => escape_xml_into(out, s),
            EscapeContext::Sexpr => escape_sexpr_into(out, s),
            EscapeContext::Regex => escape_regex_into(out, s),
            EscapeContext::Sql => escape_sql_into(out, s),
            EscapeContext::Shell => escape_shell_into(out, s),
            EscapeContext::Uri => uri_encode_into(out, s),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EscapeContext::Chars(_) => "chars",
            EscapeContext::Quoted => "quoted",
            EscapeContext::Xml => "xml",
            EscapeContext::Sexpr => "sexpr",
            EscapeContext::Regex => "regex",
            EscapeContext::Sql => "sql",
            EscapeContext::Shell => "shell",
            EscapeContext::Uri => "uri",
        }
    }
}

/// Precede every character of `toescape`, and `escape` itself, with `escape`.
///
/// # Examples
/// ```
/// use textbuilder::escape_chars;
///
/// assert_eq!(escape_chars('\\', ":", r"a:b\c"), r"a\:b\\c");
/// ```
pub fn escape_chars(escape: char, toescape: &str, s: &str) -> String {
    EscapeSet::new(escape, toescape).escape(s)
}

pub fn escape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_quoted_into(&mut out, s);
    out
}

pub fn escape_quoted_into(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (idx, byte) in bytes.iter().enumerate() {
        if !matches!(byte, b'"' | b'\\') {
            continue;
        }
        out.push_str(&s[start..idx]);
        out.push('\\');
        start = idx;
    }
    out.push_str(&s[start..]);
}

/// Replace XML markup characters with entity references.
///
/// Control characters other than tab, line feed and carriage return cannot
/// appear in XML 1.0 documents and are dropped.
///
/// # Examples
/// ```
/// use textbuilder::escape_xml;
///
/// assert_eq!(escape_xml("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_xml_into(&mut out, s);
    out
}

pub fn escape_xml_into(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (idx, byte) in bytes.iter().enumerate() {
        let escaped = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&apos;",
            b'\t' | b'\n' | b'\r' => continue,
            0x00..=0x1f => "",
            _ => continue,
        };
        out.push_str(&s[start..idx]);
        out.push_str(escaped);
        start = idx + 1;
    }
    out.push_str(&s[start..]);
}

pub fn escape_sexpr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_sexpr_into(&mut out, s);
    out
}

pub fn escape_sexpr_into(out: &mut String, s: &str) {
    EscapeSet::new('\\', SEXPR_SPECIAL).escape_into(out, s);
}

/// # Examples
/// ```
/// use textbuilder::escape_regex;
///
/// assert_eq!(escape_regex("a.b*"), r"a\.b\*");
/// ```
pub fn escape_regex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_regex_into(&mut out, s);
    out
}

pub fn escape_regex_into(out: &mut String, s: &str) {
    EscapeSet::new('\\', REGEX_SPECIAL).escape_into(out, s);
}

/// Double every single quote. The surrounding quotes are the caller's job.
///
/// # Examples
/// ```
/// use textbuilder::escape_sql;
///
/// assert_eq!(escape_sql("O'Brien"), "O''Brien");
/// ```
pub fn escape_sql(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_sql_into(&mut out, s);
    out
}

pub fn escape_sql_into(out: &mut String, s: &str) {
    let mut start = 0;
    for idx in memchr_iter(b'\'', s.as_bytes()) {
        out.push_str(&s[start..=idx]);
        out.push('\'');
        start = idx + 1;
    }
    out.push_str(&s[start..]);
}

/// Render `s` as a single shell word.
///
/// Words without shell metacharacters pass through unchanged, the empty word
/// becomes `''`, anything else is single-quoted with embedded quotes written
/// as `'\''`.
///
/// # Examples
/// ```
/// use textbuilder::escape_shell;
///
/// assert_eq!(escape_shell("it's"), r"'it'\''s'");
/// assert_eq!(escape_shell("/usr/bin/qemu"), "/usr/bin/qemu");
/// ```
pub fn escape_shell(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_shell_into(&mut out, s);
    out
}

pub fn escape_shell_into(out: &mut String, s: &str) {
    if s.is_empty() {
        out.push_str("''");
        return;
    }
    if !s.bytes().any(is_shell_special) {
        out.push_str(s);
        return;
    }

    out.push('\'');
    let mut start = 0;
    for idx in memchr_iter(b'\'', s.as_bytes()) {
        out.push_str(&s[start..idx]);
        out.push_str("'\\''");
        start = idx + 1;
    }
    out.push_str(&s[start..]);
    out.push('\'');
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
///
/// # Examples
/// ```
/// use textbuilder::uri_encode;
///
/// assert_eq!(uri_encode("a b/c"), "a%20b%2Fc");
/// ```
pub fn uri_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    uri_encode_into(&mut out, s);
    out
}

pub fn uri_encode_into(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        if is_uri_unreserved(byte) {
            continue;
        }
        // Runs between encoded bytes are ASCII, so `start..idx` is on a boundary.
        out.push_str(&s[start..idx]);
        out.push('%');
        out.push(HEX_UPPER[(byte >> 4) as usize] as char);
        out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
        start = idx + 1;
    }
    out.push_str(&s[start..]);
}
