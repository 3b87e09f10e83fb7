use crate::constants::{CHILD_INDENT_STEP, DEFAULT_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn get_spaces(self) -> usize {
        match self {
            Indent::Spaces(count) => count,
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(0)
    }
}

#[derive(Debug, Clone)]
pub struct BuilderOptions {
    pub indent: Indent,
    pub child_step: usize,
    pub capacity: usize,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_child_step(mut self, child_step: usize) -> Self {
        self.child_step = child_step;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            child_step: CHILD_INDENT_STEP,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_defaults() {
        let opts = BuilderOptions::default();
        assert_eq!(opts.indent, Indent::Spaces(0));
        assert_eq!(opts.child_step, 2);
        assert_eq!(opts.capacity, 0);
    }

    #[rstest::rstest]
    fn test_chained_setters() {
        let opts = BuilderOptions::new()
            .with_indent(Indent::spaces(4))
            .with_child_step(4)
            .with_capacity(128);
        assert_eq!(opts.indent.get_spaces(), 4);
        assert_eq!(opts.child_step, 4);
        assert_eq!(opts.capacity, 128);
    }
}
