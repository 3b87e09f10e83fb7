mod indent;
mod store;
mod trim;

use std::fmt;

use memchr::{memchr, memchr_iter};
use tracing::debug;

use crate::escape::{self, EscapeContext, EscapeSet, Template};
use crate::options::BuilderOptions;
use crate::{Error, Result};

use self::indent::IndentTracker;
use self::store::Store;

/// Growable text buffer that re-applies its indentation after line breaks.
///
/// Indentation is injected lazily: before a non-empty line segment is written,
/// the builder checks whether its content currently ends with `\n` and, if so,
/// writes `indent()` spaces first. The result therefore does not depend on
/// how the text was split across calls, and blank lines stay free of trailing
/// whitespace. Nothing is injected at the very start of the buffer unless
/// [`apply_indent`](Self::apply_indent) asks for it.
///
/// Every mutating call returns [`Result`]. Growth uses fallible reservation,
/// so running out of memory yields [`Error::Alloc`] instead of aborting, and a
/// failed call leaves the content exactly as it was.
///
/// # Examples
/// ```
/// use textbuilder::TextBuilder;
///
/// let mut buf = TextBuilder::new();
/// buf.add("<domain>\n")?;
/// let mut child = buf.child();
/// child.apply_indent()?;
/// child.escape_xml("<name>{}</name>\n", "a&b")?;
/// buf.add_buffer(&mut child)?;
/// buf.add("</domain>\n")?;
/// assert_eq!(buf.content_and_reset(), "<domain>\n  <name>a&amp;b</name>\n</domain>\n");
/// # Ok::<(), textbuilder::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    store: Store,
    indent: IndentTracker,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &BuilderOptions) -> Result<Self> {
        Ok(Self {
            store: Store::with_capacity(options.capacity)?,
            indent: IndentTracker::new(options.indent.get_spaces(), options.child_step),
        })
    }

    /// Empty builder indented one step deeper than `self`.
    pub fn child(&self) -> Self {
        Self {
            store: Store::new(),
            indent: IndentTracker::new(self.indent.child(), self.indent.step()),
        }
    }

    pub fn indent(&self) -> usize {
        self.indent.width()
    }

    /// A `usize` width cannot be negative, so there is nothing to reject here.
    pub fn set_indent(&mut self, width: usize) {
        self.indent.set(width);
    }

    pub fn adjust_indent(&mut self, delta: isize) -> usize {
        self.indent.adjust(delta)
    }

    pub fn child_indent(&self) -> usize {
        self.indent.child()
    }

    /// Width the next non-empty write would be prefixed with.
    pub fn effective_indent(&self) -> usize {
        if self.at_line_start() {
            self.indent.width()
        } else {
            0
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn current_content(&self) -> &str {
        self.store.as_str()
    }

    /// Hand the accumulated text to the caller and return to the initial
    /// state: empty content at width 0. The child step is kept.
    pub fn content_and_reset(&mut self) -> String {
        self.indent.set(0);
        self.store.take()
    }

    /// Same reset as [`content_and_reset`](Self::content_and_reset), but the
    /// content is dropped and the storage freed.
    pub fn free_and_reset(&mut self) {
        self.store.release();
        self.indent.set(0);
    }

    pub fn release(self) {}

    pub fn add(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }
        let width = self.indent.width();
        if width == 0 {
            return self.store.push_str(s);
        }

        let bytes = s.as_bytes();
        let lines = memchr_iter(b'\n', bytes).count() + 1;
        self.store.reserve(s.len().saturating_add(lines.saturating_mul(width)))?;

        let mut start = 0;
        while start < bytes.len() {
            let line_end = memchr(b'\n', &bytes[start..]).map(|offset| start + offset);
            let stop = line_end.map_or(bytes.len(), |end| end + 1);
            if line_end != Some(start) && self.at_line_start() {
                self.store.push_spaces(width)?;
            }
            self.store.push_str(&s[start..stop])?;
            start = stop;
        }
        Ok(())
    }

    pub fn add_char(&mut self, ch: char) -> Result<()> {
        let width = self.indent.width();
        if ch != '\n' && width > 0 && self.at_line_start() {
            self.store.reserve(width + ch.len_utf8())?;
            self.store.push_spaces(width)?;
        }
        self.store.push_char(ch)
    }

    /// Append each part in order.
    pub fn add_all(&mut self, parts: &[&str]) -> Result<()> {
        let total = parts.iter().map(|part| part.len()).sum();
        self.store.reserve(total)?;
        for part in parts {
            self.add(part)?;
        }
        Ok(())
    }

    /// Append pre-formatted arguments; see the [`add_fmt!`](crate::add_fmt) macro.
    ///
    /// The arguments are rendered completely before anything reaches the
    /// buffer, so a failing `Display` impl leaves the builder untouched.
    pub fn add_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        if let Some(literal) = args.as_str() {
            return self.add(literal);
        }
        let mut composed = String::new();
        fmt::write(&mut composed, args).map_err(|_| Error::Format)?;
        self.add(&composed)
    }

    /// Move the content of `other` into `self`, re-indented at `self`'s width.
    ///
    /// Every continuation line of `other` gets `self`'s width on top of
    /// whatever it already starts with; `other`'s own width plays no part.
    /// `other` is left empty. If the move fails, `other` keeps its content.
    pub fn add_buffer(&mut self, other: &mut TextBuilder) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        let content = other.store.take();
        if let Err(err) = self.add(&content) {
            other.store.replace(content);
            return Err(err);
        }
        Ok(())
    }

    /// Write the indentation now if the builder is empty or at a line start.
    pub fn apply_indent(&mut self) -> Result<()> {
        let width = self.indent.width();
        if width == 0 || !(self.is_empty() || self.at_line_start()) {
            return Ok(());
        }
        self.store.push_spaces(width)
    }

    /// Escape `s` with `escape` before each char of `toescape` and add it through `template`.
    pub fn escape(&mut self, escape: char, toescape: &str, template: &str, s: &str) -> Result<()> {
        let set = EscapeSet::new(escape, toescape);
        self.add_templated(template, &set.escape(s))
    }

    pub fn escape_quoted(&mut self, template: &str, s: &str) -> Result<()> {
        self.add_templated(template, &escape::escape_quoted(s))
    }

    pub fn escape_xml(&mut self, template: &str, s: &str) -> Result<()> {
        self.add_templated(template, &escape::escape_xml(s))
    }

    pub fn escape_sexpr(&mut self, template: &str, s: &str) -> Result<()> {
        self.add_templated(template, &escape::escape_sexpr(s))
    }

    pub fn escape_regex(&mut self, template: &str, s: &str) -> Result<()> {
        self.add_templated(template, &escape::escape_regex(s))
    }

    pub fn escape_sql(&mut self, template: &str, s: &str) -> Result<()> {
        self.add_templated(template, &escape::escape_sql(s))
    }

    /// Add `s` as a single shell word.
    ///
    /// A quoted word that spans lines is re-indented like any other content,
    /// which changes its value when the builder is indented.
    pub fn escape_shell(&mut self, s: &str) -> Result<()> {
        self.add(&escape::escape_shell(s))
    }

    pub fn uri_encode(&mut self, s: &str) -> Result<()> {
        self.add(&escape::uri_encode(s))
    }

    pub fn escape_with(&mut self, context: &EscapeContext, s: &str) -> Result<()> {
        self.add(&context.escape(s))
    }

    fn add_templated(&mut self, template: &str, escaped: &str) -> Result<()> {
        let template = Template::parse(template).inspect_err(|err| {
            debug!(error = %err, "rejected escape template");
        })?;
        self.add(&template.render(escaped))
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        self.store.last_byte() == Some(b'\n')
    }
}

impl fmt::Write for TextBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.add(s).map_err(|_| fmt::Error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.add_char(c).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current_content())
    }
}
