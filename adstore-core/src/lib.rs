//! Core types for `adstore`
//!
//! This contains the buffer abstraction that advertising data is stored within. The record store
//! in the crate `adstore` never allocates or frees a buffer, it only asks a buffer for more tail
//! space or gives tail space back.
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod buffer;
