/// Spaces added to a parent's width when deriving a child builder.
pub const CHILD_INDENT_STEP: usize = 2;

pub const DEFAULT_CAPACITY: usize = 0;

/// Characters backslash-escaped inside regular expressions.
pub const REGEX_SPECIAL: &str = "^$.|?*+()[]{}\\";

/// Characters backslash-escaped inside S-expression atoms.
pub const SEXPR_SPECIAL: &str = "\\'\"() \t";

/// Bytes that force single-quoting of a shell word.
pub const SHELL_SPECIAL: &[u8] = b"|&;<>()$`\\\"' \t\n*?[#~=%";

pub(crate) const SPACES: &str = "                                                                ";

#[inline]
pub fn is_uri_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

#[inline]
pub fn is_shell_special(byte: u8) -> bool {
    SHELL_SPECIAL.contains(&byte)
}
