//! Buffer Utilities
//!
//! Advertising data and scan response data are assembled within a buffer that has a hard
//! capacity. Where that buffer lives is up to the user. It can be a statically sized array, a
//! slice borrowed from a lower layer, or (with the feature `alloc`) a vector. `buffer` contains the
//! trait [`AdBuffer`] for 'filling' and 'emptying' the tail of any of these kinds of buffers.
//!
//! A buffer has two regions. The *occupied* region is what is de-referenced to by the buffer and
//! contains the advertising data. The *tail* is the unused capacity past the end of the occupied
//! region. The tail can only be changed through the methods of `AdBuffer`.
use core::fmt::{Display, Formatter};
use core::ops::DerefMut;

pub mod slice;
pub mod stack;
#[cfg(feature = "alloc")]
pub mod vec;

/// The buffer type for advertising data
///
/// A type that implements `AdBuffer` must de-reference to the occupied bytes of the buffer, and
/// nothing more. The length of the de-referenced slice is the occupied length. Growing the tail
/// adds bytes to the end of the occupied region, shrinking the tail removes bytes from the end of
/// the occupied region. The capacity of a buffer, the occupied length plus the tail length, never
/// changes.
///
/// # Concurrency
/// There is no synchronization within an `AdBuffer`. A buffer shared between threads must be
/// wrapped within something like a mutex by the user.
pub trait AdBuffer: DerefMut<Target = [u8]> {
    /// Get the number of unused bytes at the tail of the buffer
    fn tail_len(&self) -> usize;

    /// Try to grow the occupied region into the tail
    ///
    /// On success the returned slice is the `how_many` bytes newly added to the end of the occupied
    /// region. These bytes are zeroed.
    ///
    /// # Error
    /// An error is returned if `how_many` is larger than the tail length. The buffer is not changed
    /// when an error is returned.
    fn try_grow_tail(&mut self, how_many: usize) -> Result<&mut [u8], BufferError>;

    /// Try to give bytes at the end of the occupied region back to the tail
    ///
    /// # Error
    /// An error is returned if `how_many` is larger than the occupied length. The buffer is not
    /// changed when an error is returned.
    fn try_shrink_tail(&mut self, how_many: usize) -> Result<(), BufferError>;
}

/// Extension methods for types that implement [`AdBuffer`]
pub trait AdBufferExt: AdBuffer {
    /// Get the total capacity of the buffer
    fn capacity(&self) -> usize {
        self.len() + self.tail_len()
    }

    /// Check if there is no tail left
    fn is_full(&self) -> bool {
        self.tail_len() == 0
    }
}

impl<T> AdBufferExt for T where T: AdBuffer + ?Sized {}

/// Error from an [`AdBuffer`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The tail is too small to grow by the requested amount
    TailCapacity { requested: usize, available: usize },
    /// The occupied region is too small to shrink by the requested amount
    LengthOfBuffer { requested: usize, len: usize },
    /// The initial occupied length is larger than the buffer
    InitialLength { len: usize, capacity: usize },
}

impl Display for BufferError {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            BufferError::TailCapacity { requested, available } => write!(
                f,
                "cannot grow the buffer by {requested} bytes, only {available} bytes are left in the tail"
            ),
            BufferError::LengthOfBuffer { requested, len } => write!(
                f,
                "cannot shrink the buffer by {requested} bytes, only {len} bytes are occupied"
            ),
            BufferError::InitialLength { len, capacity } => write!(
                f,
                "an occupied length of {len} is larger than the buffer capacity of {capacity}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

/// Check a grow request against the tail length
///
/// This is the shared check used by the implementations of [`AdBuffer::try_grow_tail`].
pub(crate) fn check_grow(requested: usize, available: usize) -> Result<(), BufferError> {
    if requested <= available {
        Ok(())
    } else {
        Err(BufferError::TailCapacity { requested, available })
    }
}

/// Check a shrink request against the occupied length
pub(crate) fn check_shrink(requested: usize, len: usize) -> Result<(), BufferError> {
    if requested <= len {
        Ok(())
    } else {
        Err(BufferError::LengthOfBuffer { requested, len })
    }
}
