//! Records of advertising data
//!
//! A record is not stored as its own type. [`AdRecord`] is a validated view into the bytes of a
//! buffer, and [`Records`] iterates over the records within the occupied region of a buffer.

use crate::HEADER_SIZE;
use core::fmt::{Display, Formatter};
use core::ops::Range;

/// Error for a malformed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// There are no bytes for the length field
    RawTooSmall,
    /// The length field extends past the end of the bytes
    IncorrectLength { offset: usize, len: u8 },
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            RecordError::RawTooSmall => f.write_str("raw data length is too small"),
            RecordError::IncorrectLength { offset, len } => write!(
                f,
                "the length {len} of the record at offset {offset} is larger than the remaining bytes"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecordError {}

/// The location of a record within a buffer
///
/// This is an index into the occupied region of a buffer that was validated when the record was
/// located. It stays valid until the buffer is changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLocation {
    offset: usize,
    value_len: usize,
}

impl RecordLocation {
    /// Get the offset of the length byte of the record
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the offset of the first byte of the value
    pub fn value_offset(&self) -> usize {
        self.offset + HEADER_SIZE
    }

    /// Get the length of the value
    pub fn value_len(&self) -> usize {
        self.value_len
    }

    /// Get the full size of the record
    pub fn size(&self) -> usize {
        self.value_len + HEADER_SIZE
    }

    /// Get the range of the value within the buffer
    pub fn value_range(&self) -> Range<usize> {
        self.value_offset()..self.offset + self.size()
    }

    /// Get the range of the entire record within the buffer
    pub fn record_range(&self) -> Range<usize> {
        self.offset..self.offset + self.size()
    }
}

/// A view of a single record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdRecord<'a> {
    offset: usize,
    raw: &'a [u8],
}

impl<'a> AdRecord<'a> {
    /// Try to create a new `AdRecord`
    ///
    /// This will return a new `AdRecord` if `bytes` starts with a complete record. A slice to the
    /// rest of `bytes` is returned with the new `AdRecord`. Input `offset` is the position of
    /// `bytes` within the buffer and is only used for the location of the record.
    ///
    /// `None` is returned if the length of the record is zero. This is used to indicate an early
    /// termination of the entire sequence, so any bytes that come after it are to be ignored.
    ///
    /// # Errors
    /// An error is returned if `bytes` is empty or the length of the record extends past the end
    /// of `bytes`.
    pub fn try_new(bytes: &'a [u8], offset: usize) -> Result<Option<(Self, &'a [u8])>, RecordError> {
        let len = *bytes.first().ok_or(RecordError::RawTooSmall)?;

        match len as usize {
            0 => Ok(None),
            size if size < bytes.len() => {
                let (raw, rest) = bytes.split_at(1 + size);

                Ok(Some((Self { offset, raw }, rest)))
            }
            _ => Err(RecordError::IncorrectLength { offset, len }),
        }
    }

    /// Get the AD type
    pub fn ad_type(&self) -> u8 {
        self.raw[1]
    }

    /// Get the value
    pub fn value(&self) -> &'a [u8] {
        &self.raw[HEADER_SIZE..]
    }

    /// Get the full size of the record
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Get the location of this record
    pub fn location(&self) -> RecordLocation {
        RecordLocation {
            offset: self.offset,
            value_len: self.raw.len() - HEADER_SIZE,
        }
    }

    /// Get the raw bytes of the record
    pub fn into_inner(self) -> &'a [u8] {
        self.raw
    }
}

/// An iterator over records
///
/// The iterator stops when there is no more data, when a length field is zero (an early
/// termination), or when the length of a record extends past the end of the data. A malformed
/// record ends iteration silently; use [`checked`] to see it as an error.
///
/// [`checked`]: Records::checked
#[derive(Clone, Copy, Debug)]
pub struct Records<'a> {
    offset: usize,
    data: &'a [u8],
}

impl<'a> Records<'a> {
    /// Create an iterator over the records at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        let offset = 0;

        Records { offset, data }
    }

    /// Create an iterator that reports malformed records
    ///
    /// The returned iterator ends after it returns an error.
    pub fn checked(self) -> impl Iterator<Item = Result<AdRecord<'a>, RecordError>> + 'a {
        struct Checked<'a>(Records<'a>);

        impl<'a> Iterator for Checked<'a> {
            type Item = Result<AdRecord<'a>, RecordError>;

            fn next(&mut self) -> Option<Self::Item> {
                let this = &mut self.0;

                if this.data.is_empty() {
                    return None;
                }

                match AdRecord::try_new(this.data, this.offset) {
                    Ok(None) => {
                        this.data = &[];
                        None
                    }
                    Ok(Some((record, rest))) => {
                        this.offset += record.size();
                        this.data = rest;
                        Some(Ok(record))
                    }
                    Err(e) => {
                        this.data = &[];
                        Some(Err(e))
                    }
                }
            }
        }

        Checked(self)
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = AdRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match AdRecord::try_new(self.data, self.offset) {
            Ok(Some((record, rest))) => {
                self.offset += record.size();
                self.data = rest;
                Some(record)
            }
            _ => {
                self.data = &[];
                None
            }
        }
    }
}

impl<'a> From<&'a [u8]> for Records<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}
