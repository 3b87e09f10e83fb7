use tracing::{debug, trace};

use crate::constants::SPACES;
use crate::{Error, Result};

/// Contiguous UTF-8 storage behind a [`TextBuilder`](super::TextBuilder).
///
/// Growth goes through `String::try_reserve`, which at least doubles the
/// capacity when it has to reallocate, so a run of appends costs amortized
/// linear time. A failed reservation surfaces as [`Error::Alloc`] and leaves
/// the stored text untouched.
#[derive(Debug, Default, Clone)]
pub(crate) struct Store {
    buffer: String,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut store = Self::new();
        store.reserve(capacity)?;
        Ok(store)
    }

    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        if self.buffer.capacity() - self.buffer.len() >= additional {
            return Ok(());
        }
        let before = self.buffer.capacity();
        self.buffer.try_reserve(additional).map_err(|source| {
            debug!(
                requested = additional,
                len = self.buffer.len(),
                "buffer reservation failed"
            );
            Error::Alloc {
                requested: additional,
                source,
            }
        })?;
        trace!(from = before, to = self.buffer.capacity(), "buffer grown");
        Ok(())
    }

    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.reserve(s.len())?;
        self.buffer.push_str(s);
        Ok(())
    }

    pub fn push_char(&mut self, ch: char) -> Result<()> {
        self.reserve(ch.len_utf8())?;
        self.buffer.push(ch);
        Ok(())
    }

    pub fn push_spaces(&mut self, mut count: usize) -> Result<()> {
        self.reserve(count)?;
        while count > 0 {
            let chunk = count.min(SPACES.len());
            self.buffer.push_str(&SPACES[..chunk]);
            count -= chunk;
        }
        Ok(())
    }

    #[inline]
    pub fn last_byte(&self) -> Option<u8> {
        self.buffer.as_bytes().last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Callers must pass a char boundary no greater than `len()`.
    pub fn truncate(&mut self, len: usize) {
        self.buffer.truncate(len);
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn replace(&mut self, content: String) {
        self.buffer = content;
    }

    pub fn release(&mut self) {
        self.buffer = String::new();
    }
}
