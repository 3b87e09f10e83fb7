use tracing::debug;

use crate::constants::CHILD_INDENT_STEP;

/// Indentation width, in spaces, applied after line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndentTracker {
    width: usize,
    step: usize,
}

impl IndentTracker {
    pub fn new(width: usize, step: usize) -> Self {
        Self { width, step }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn set(&mut self, width: usize) {
        self.width = width;
    }

    /// Shift the width by `delta`, saturating at zero.
    pub fn adjust(&mut self, delta: isize) -> usize {
        let magnitude = delta.unsigned_abs();
        self.width = if delta < 0 {
            if magnitude > self.width {
                debug!(
                    width = self.width,
                    delta, "indent adjustment clamped at zero"
                );
            }
            self.width.saturating_sub(magnitude)
        } else {
            self.width.saturating_add(magnitude)
        };
        self.width
    }

    pub fn child(&self) -> usize {
        self.width.saturating_add(self.step)
    }
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new(0, CHILD_INDENT_STEP)
    }
}
