//! Bluetooth LE advertising data record store
//!
//! Advertising data (and scan response data) is a sequence of *AD structures*, called records
//! here. Each record is one byte for the length, one byte for the AD type, and then the value.
//! The length byte is the number of bytes that follow it, so a record's full size is the length
//! byte plus one.
//!
//! ```text
//! [ length | AD type | value ... ][ length | AD type | value ... ] ...
//! ```
//!
//! This crate edits a sequence of records within an [`AdBuffer`] in place. A buffer is always
//! kept as a contiguous, unpadded sequence of valid records with at most one record for each AD
//! type. The capacity of the buffer is never exceeded, and an operation that cannot complete will
//! not change the buffer.
//!
//! The record store holds no state. Every operation takes the buffer as an argument, so multiple
//! independent buffers can be worked on at the same time.
//!
//! ```
//! # use adstore::{store, name, NameKind};
//! # use adstore_core::buffer::stack::StackBuffer;
//! let mut buffer = StackBuffer::<31>::new();
//!
//! store::insert(&mut buffer, 0x01, &[0x06]).unwrap();
//!
//! let kind = name::set_name_with_fallback(&mut buffer, b"My Device", 0).unwrap();
//!
//! assert_eq!(NameKind::Complete, kind);
//!
//! assert_eq!(b"My Device", store::get(&buffer, 0x09).unwrap());
//! ```
//!
//! # Concurrency
//! Operations are not reentrant on the same buffer. Sharing a buffer between threads requires
//! external synchronization (a mutex or similar) by the user.
//!
//! [`AdBuffer`]: adstore_core::buffer::AdBuffer
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

macro_rules! log_trace {
    ( $arg1:expr $(, $args:expr)* ) => { log::trace!(concat!("(AD) ", $arg1) $(, $args)*) }
}

macro_rules! log_debug {
    ( $arg1:expr $(, $args:expr)* ) => { log::debug!(concat!("(AD) ", $arg1) $(, $args)*) }
}

macro_rules! log_error {
    ( $arg1:expr $(, $args:expr)* ) => { log::error!(concat!("(AD) ", $arg1) $(, $args)*) }
}

pub mod assigned;
pub mod config;
mod error;
pub mod flags;
pub mod name;
pub mod record;
pub mod store;

pub use adstore_core::buffer;
pub use error::{Error, Inconsistency, InvalidArgument};
pub use name::NameKind;
pub use record::{AdRecord, RecordLocation, Records};

/// The size of the header of a record
///
/// The full size of a record is this plus the length of the value.
pub const HEADER_SIZE: usize = 2;

/// The maximum length of the value of a record
///
/// The length byte is a `u8` and counts the AD type byte as well as the value.
pub const MAX_VALUE_LEN: usize = <u8>::MAX as usize - 1;
