use std::str::Chars;

use crate::{Error, Result};

/// A runtime format string with exactly one `{}` substitution point.
///
/// `{{` and `}}` stand for literal braces, as in `format!`.
///
/// # Examples
/// ```
/// use textbuilder::Template;
///
/// let template = Template::parse("<name>{}</name>")?;
/// assert_eq!(template.render("demo"), "<name>demo</name>");
/// assert!(Template::parse("{} and {}").is_err());
/// # Ok::<(), textbuilder::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    pub fn parse(template: &str) -> Result<Self> {
        let mut prefix = String::with_capacity(template.len());
        let mut suffix = String::new();
        let mut seen = false;
        let mut chars = template.chars();

        while let Some(ch) = chars.next() {
            let out = if seen { &mut suffix } else { &mut prefix };
            match ch {
                '{' => match chars.next() {
                    Some('{') => out.push('{'),
                    Some('}') if seen => {
                        return Err(Error::invalid_template(
                            template,
                            "expected exactly one placeholder",
                        ))
                    }
                    Some('}') => seen = true,
                    _ => {
                        return Err(Error::invalid_template(
                            template,
                            "placeholders must be written as {}",
                        ))
                    }
                },
                '}' => {
                    expect_closing(&mut chars, template)?;
                    out.push('}');
                }
                _ => out.push(ch),
            }
        }

        if !seen {
            return Err(Error::invalid_template(template, "missing {} placeholder"));
        }
        Ok(Self { prefix, suffix })
    }

    /// The bare `{}` template.
    pub fn identity() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn render(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + value.len() + self.suffix.len());
        self.render_into(&mut out, value);
        out
    }

    pub fn render_into(&self, out: &mut String, value: &str) {
        out.push_str(&self.prefix);
        out.push_str(value);
        out.push_str(&self.suffix);
    }
}

fn expect_closing(chars: &mut Chars<'_>, template: &str) -> Result<()> {
    match chars.next() {
        Some('}') => Ok(()),
        _ => Err(Error::invalid_template(template, "unmatched '}'")),
    }
}
