//! A buffer over a borrowed slice
//!
//! This is used when the memory for the advertising data is owned by someone else, such as a
//! lower layer that already placed some data at the front of it.

use super::{check_grow, check_shrink, AdBuffer, BufferError};
use core::ops::{Deref, DerefMut};

/// An [`AdBuffer`] borrowing its memory
///
/// The capacity of a `SliceBuffer` is the length of the borrowed slice.
#[derive(Debug)]
pub struct SliceBuffer<'a> {
    len: usize,
    buffer: &'a mut [u8],
}

impl<'a> SliceBuffer<'a> {
    /// Create a new, empty, `SliceBuffer`
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let len = 0;

        SliceBuffer { len, buffer }
    }

    /// Create a `SliceBuffer` where the first `len` bytes of `buffer` are already occupied
    ///
    /// # Error
    /// `len` cannot be larger than the length of `buffer`.
    pub fn with_len(buffer: &'a mut [u8], len: usize) -> Result<Self, BufferError> {
        if len <= buffer.len() {
            Ok(SliceBuffer { len, buffer })
        } else {
            Err(BufferError::InitialLength {
                len,
                capacity: buffer.len(),
            })
        }
    }

    /// Return the occupied part of the borrowed slice
    pub fn into_inner(self) -> &'a mut [u8] {
        &mut self.buffer[..self.len]
    }
}

impl Deref for SliceBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer[..self.len]
    }
}

impl DerefMut for SliceBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer[..self.len]
    }
}

impl AdBuffer for SliceBuffer<'_> {
    fn tail_len(&self) -> usize {
        self.buffer.len() - self.len
    }

    fn try_grow_tail(&mut self, how_many: usize) -> Result<&mut [u8], BufferError> {
        check_grow(how_many, self.tail_len())?;

        let start = self.len;

        self.len += how_many;

        let grown = &mut self.buffer[start..self.len];

        grown.fill(0);

        Ok(grown)
    }

    fn try_shrink_tail(&mut self, how_many: usize) -> Result<(), BufferError> {
        check_shrink(how_many, self.len)?;

        self.len -= how_many;

        Ok(())
    }
}
