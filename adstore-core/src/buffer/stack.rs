//! Statically allocated buffers
//!
//! Buffers in this module are statically allocated. The size of the buffer must be known at
//! compile time. A legacy advertising payload fits within a `StackBuffer<31>`.

use super::{check_grow, check_shrink, AdBuffer, BufferError};
use core::fmt::{Debug, Formatter};
use core::ops::{Deref, DerefMut};

/// A linear buffer of bytes
///
/// The capacity of a `StackBuffer` is the constant `SIZE`. Two `StackBuffer`s are equal when
/// their occupied regions are equal.
#[derive(Clone, Copy)]
pub struct StackBuffer<const SIZE: usize> {
    buffer: [u8; SIZE],
    count: usize,
}

impl<const SIZE: usize> StackBuffer<SIZE> {
    /// Create a new, empty, `StackBuffer`
    pub const fn new() -> Self {
        let buffer = [0; SIZE];

        let count = 0;

        Self { buffer, count }
    }

    /// Create a `StackBuffer` already containing `data`
    ///
    /// This is for creating a buffer with data that was placed by a lower layer.
    ///
    /// # Error
    /// An error is returned if `data` is larger than `SIZE`.
    pub fn try_from_slice(data: &[u8]) -> Result<Self, BufferError> {
        if data.len() > SIZE {
            return Err(BufferError::InitialLength {
                len: data.len(),
                capacity: SIZE,
            });
        }

        let mut this = Self::new();

        this.buffer[..data.len()].copy_from_slice(data);

        this.count = data.len();

        Ok(this)
    }
}

impl<const SIZE: usize> Default for StackBuffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> Deref for StackBuffer<SIZE> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer[..self.count]
    }
}

impl<const SIZE: usize> DerefMut for StackBuffer<SIZE> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer[..self.count]
    }
}

impl<const SIZE: usize> AdBuffer for StackBuffer<SIZE> {
    fn tail_len(&self) -> usize {
        SIZE - self.count
    }

    fn try_grow_tail(&mut self, how_many: usize) -> Result<&mut [u8], BufferError> {
        check_grow(how_many, self.tail_len())?;

        let start = self.count;

        self.count += how_many;

        let grown = &mut self.buffer[start..self.count];

        grown.fill(0);

        Ok(grown)
    }

    fn try_shrink_tail(&mut self, how_many: usize) -> Result<(), BufferError> {
        check_shrink(how_many, self.count)?;

        self.count -= how_many;

        Ok(())
    }
}

impl<const SIZE: usize> PartialEq for StackBuffer<SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl<const SIZE: usize> Eq for StackBuffer<SIZE> {}

impl<const SIZE: usize> Debug for StackBuffer<SIZE> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("StackBuffer")?;
        Debug::fmt(self.deref(), f)
    }
}
