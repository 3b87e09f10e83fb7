pub mod buffer;
pub mod compat;
pub mod constants;
pub mod error;
pub mod escape;
pub mod options;
pub mod uri;

pub use crate::buffer::TextBuilder;
pub use crate::error::{Error, ErrorKind};
pub use crate::escape::{
    escape_chars, escape_quoted, escape_regex, escape_sexpr, escape_shell, escape_sql,
    escape_xml, uri_encode, EscapeContext, EscapeSet, Template,
};
pub use crate::options::{BuilderOptions, Indent};
pub use crate::uri::Uri;

pub type Result<T> = std::result::Result<T, Error>;

/// Format into a [`TextBuilder`] through its line-aware path.
///
/// # Examples
/// ```
/// use textbuilder::{add_fmt, TextBuilder};
///
/// let mut buf = TextBuilder::new();
/// buf.set_indent(2);
/// add_fmt!(buf, "<memory unit='{}'>\n{}</memory>", "KiB", 1024)?;
/// assert_eq!(buf.current_content(), "<memory unit='KiB'>\n  1024</memory>");
/// # Ok::<(), textbuilder::Error>(())
/// ```
#[macro_export]
macro_rules! add_fmt {
    ($buf:expr, $($arg:tt)*) => {
        $buf.add_fmt(::core::format_args!($($arg)*))
    };
}
