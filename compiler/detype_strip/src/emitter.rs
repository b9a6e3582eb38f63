//! Append-only output accumulator.
//!
//! Copies retained token text verbatim. Capacity doubles when full, using
//! the same growth policy as the token sequence, and exhaustion is reported
//! as [`StripError::OutOfMemory`] instead of aborting.

use detype_lexer::growth::{next_capacity, MIN_CAPACITY};
use detype_lexer::BufferKind;

use crate::StripError;

/// Growable text buffer owned by one strip invocation.
#[derive(Debug)]
pub struct Emitter {
    out: String,
}

impl Emitter {
    /// Emitter with room for `capacity` bytes (at least the growth minimum).
    pub fn with_capacity(capacity: usize) -> Result<Self, StripError> {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut out = String::new();
        out.try_reserve_exact(capacity)
            .map_err(|_| out_of_memory(capacity))?;
        Ok(Emitter { out })
    }

    /// Append `text` unchanged.
    pub fn push_str(&mut self, text: &str) -> Result<(), StripError> {
        let required = self.out.len().saturating_add(text.len());
        if required > self.out.capacity() {
            let target = next_capacity(self.out.capacity(), required);
            self.out
                .try_reserve_exact(target - self.out.len())
                .map_err(|_| out_of_memory(target))?;
        }
        self.out.push_str(text);
        Ok(())
    }

    /// Hand the accumulated text to the caller.
    pub fn finish(self) -> String {
        self.out
    }
}

fn out_of_memory(requested: usize) -> StripError {
    StripError::OutOfMemory {
        buffer: BufferKind::Output,
        requested,
    }
}
