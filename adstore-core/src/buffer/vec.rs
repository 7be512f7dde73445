//! A dynamically allocated buffer
//!
//! See the doc for [`VecBuffer`] for details.

use super::{check_grow, check_shrink, AdBuffer, BufferError};
use alloc::vec::Vec;

/// A vector with a hard capacity
///
/// This is a vector that will not grow past `max_len`. It is intended for extended advertising
/// where the payload limit is larger than what is reasonable to put on the stack, but the limit
/// still must be enforced. The full `max_len` is allocated when the `VecBuffer` is created so
/// growing the tail never reallocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecBuffer {
    max_len: usize,
    vec: Vec<u8>,
}

impl VecBuffer {
    /// Create a new `VecBuffer` with a capacity of `max_len`
    pub fn with_max_len(max_len: usize) -> Self {
        let vec = Vec::with_capacity(max_len);

        Self { max_len, vec }
    }

    /// Create a `VecBuffer` from a vector already containing data
    ///
    /// # Error
    /// The length of `vec` cannot be larger than `max_len`
    pub fn try_from_vec(mut vec: Vec<u8>, max_len: usize) -> Result<Self, BufferError> {
        if vec.len() > max_len {
            return Err(BufferError::InitialLength {
                len: vec.len(),
                capacity: max_len,
            });
        }

        vec.reserve_exact(max_len - vec.len());

        Ok(Self { max_len, vec })
    }

    /// Get the inner vector
    pub fn into_inner(self) -> Vec<u8> {
        self.vec
    }
}

impl core::ops::Deref for VecBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl core::ops::DerefMut for VecBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl AdBuffer for VecBuffer {
    fn tail_len(&self) -> usize {
        self.max_len - self.vec.len()
    }

    fn try_grow_tail(&mut self, how_many: usize) -> Result<&mut [u8], BufferError> {
        check_grow(how_many, self.tail_len())?;

        let start = self.vec.len();

        self.vec.resize(start + how_many, 0);

        Ok(&mut self.vec[start..])
    }

    fn try_shrink_tail(&mut self, how_many: usize) -> Result<(), BufferError> {
        check_shrink(how_many, self.vec.len())?;

        self.vec.truncate(self.vec.len() - how_many);

        Ok(())
    }
}
