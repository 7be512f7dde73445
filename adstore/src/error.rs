//! Errors of the record store

use adstore_core::buffer::BufferError;
use core::fmt::{Display, Formatter};

/// Error returned by the operations of the record store
///
/// `NotFound` and `OutOfSpace` are ordinary outcomes that a user is expected to handle. Both of
/// these errors are returned before the buffer is changed, so the buffer is the same as it was
/// before the operation was called.
///
/// `InvalidArgument` is a mistake by the caller and is also returned before the buffer is changed.
///
/// `Internal` means the buffer did not do what it said it could do. When this occurs the buffer may
/// have been partially changed and should no longer be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No record has the requested AD type
    NotFound,
    /// The operation requires more space than is available within the buffer
    OutOfSpace {
        /// The number of bytes the operation needed
        required: usize,
        /// The number of bytes that could have been used
        available: usize,
    },
    /// An argument to the operation is invalid
    InvalidArgument(InvalidArgument),
    /// The buffer and the record store disagree on the state of the buffer
    Internal(Inconsistency),
}

impl Error {
    /// Check if this error is an internal inconsistency
    ///
    /// An internal inconsistency should be treated as fatal.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            Error::NotFound => f.write_str("no record with the AD type"),
            Error::OutOfSpace { required, available } => write!(
                f,
                "not enough space in buffer, {required} bytes are required but only {available} \
                bytes are available"
            ),
            Error::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Error::Internal(e) => write!(f, "internal inconsistency: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// An invalid argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The value is too long to fit within a single record
    ValueTooLong { len: usize },
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            InvalidArgument::ValueTooLong { len } => write!(
                f,
                "a value of {len} bytes is longer than the maximum of {} bytes",
                crate::MAX_VALUE_LEN
            ),
        }
    }
}

/// An internal inconsistency between the buffer and the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// Growing the tail failed after the space for it was checked
    GrowFailed(BufferError),
    /// Shrinking the tail failed for a record that was located within the buffer
    ShrinkFailed(BufferError),
}

impl Display for Inconsistency {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            Inconsistency::GrowFailed(e) => write!(f, "tail failed to grow after the space was checked ({e})"),
            Inconsistency::ShrinkFailed(e) => write!(f, "tail failed to shrink for a located record ({e})"),
        }
    }
}
