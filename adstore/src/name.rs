//! Local name records
//!
//! The local name is the name for the Bluetooth device. It may be too long for the space left
//! within the advertising data, so there are two AD types for a local name. The *complete local
//! name* is the full name of the device. The *shortened local name* is a prefix of the full name.
//! At most one of these two records is within a buffer at any time.
//!
//! [`set_name_with_fallback`] picks the complete local name when the full name fits, and otherwise
//! falls back to the largest prefix that fits as a shortened local name.
//!
//! # Reserved Overhead
//! A lower layer may add records to the advertising data after the name is set. The most common of
//! these is the flags record. The space for these records is passed as `reserved_overhead` and is
//! never used for the name, whether or not the lower layer has already added its records.
//!
//! ```
//! # use adstore::{name, NameKind};
//! # use adstore::flags::FLAGS_RECORD_SIZE;
//! # use adstore_core::buffer::stack::StackBuffer;
//! let mut buffer = StackBuffer::<31>::new();
//!
//! let kind = name::set_name_with_fallback(
//!     &mut buffer,
//!     b"a device name that is much too long for legacy advertising",
//!     FLAGS_RECORD_SIZE,
//! ).unwrap();
//!
//! assert_eq!(NameKind::Shortened, kind);
//!
//! // 31 bytes of capacity, less three for the flags and two for the record header
//! assert_eq!(b"a device name that is much", name::get_name(&buffer).unwrap().1);
//! ```

use crate::assigned::AssignedType;
use crate::record::{RecordLocation, Records};
use crate::store::{append, remove_located, truncate_unused, unused_len};
use crate::{Error, HEADER_SIZE, MAX_VALUE_LEN};
use adstore_core::buffer::AdBuffer;

/// The kind of local name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// The full local name
    Complete,
    /// A prefix of the local name
    Shortened,
}

impl NameKind {
    /// Get the AD type for this kind of name
    pub const fn ad_type(&self) -> u8 {
        match self {
            NameKind::Complete => AssignedType::CompleteLocalName.val(),
            NameKind::Shortened => AssignedType::ShortenedLocalName.val(),
        }
    }

    /// Get the kind of name from an AD type
    pub fn from_ad_type(ad_type: u8) -> Option<Self> {
        match AssignedType::try_from(ad_type) {
            Ok(AssignedType::CompleteLocalName) => Some(NameKind::Complete),
            Ok(AssignedType::ShortenedLocalName) => Some(NameKind::Shortened),
            _ => None,
        }
    }
}

/// The name records currently within a buffer
#[derive(Default)]
struct ExistingNames {
    complete: Option<RecordLocation>,
    shortened: Option<RecordLocation>,
}

impl ExistingNames {
    fn locate(buffer: &[u8]) -> Self {
        let mut existing = ExistingNames::default();

        for record in Records::new(buffer) {
            match NameKind::from_ad_type(record.ad_type()) {
                Some(NameKind::Complete) if existing.complete.is_none() => {
                    existing.complete = Some(record.location())
                }
                Some(NameKind::Shortened) if existing.shortened.is_none() => {
                    existing.shortened = Some(record.location())
                }
                _ => (),
            }
        }

        existing
    }

    /// The number of bytes freed by removing the existing name records
    fn reclaimable(&self) -> usize {
        self.complete.iter().chain(self.shortened.iter()).map(|l| l.size()).sum()
    }

    /// Remove the existing name records
    ///
    /// The record at the larger offset is removed first so the location of the other record stays
    /// valid.
    fn remove_from<B>(self, buffer: &mut B) -> Result<(), Error>
    where
        B: AdBuffer + ?Sized,
    {
        let (first, second) = match (self.complete, self.shortened) {
            (Some(c), Some(s)) if c.offset() > s.offset() => (Some(c), Some(s)),
            (c, s) => (s, c),
        };

        for location in first.into_iter().chain(second) {
            remove_located(buffer, location)?;
        }

        Ok(())
    }
}

/// Negotiate the length of the name to write
///
/// The return is the kind of name record along with the number of bytes of `name` that will be
/// within it. `free` is every byte that can be given to the name before the reserve is taken out.
/// `boundary` is used to move a shortened length down to an acceptable cut point of the name.
fn negotiate<F>(free: usize, name_len: usize, reserved_overhead: usize, boundary: F) -> Result<(NameKind, usize), Error>
where
    F: Fn(usize) -> usize,
{
    let available = free.saturating_sub(reserved_overhead);

    if name_len <= MAX_VALUE_LEN && name_len + HEADER_SIZE <= available {
        return Ok((NameKind::Complete, name_len));
    }

    if available > HEADER_SIZE {
        let short_len = boundary(core::cmp::min(available - HEADER_SIZE, MAX_VALUE_LEN));

        if short_len != 0 {
            log_debug!(
                "name of {} bytes shortened to {} bytes ({} bytes available)",
                name_len,
                short_len,
                available
            );

            return Ok((NameKind::Shortened, short_len));
        }
    }

    log_debug!("no space for a name, only {} bytes are available", available);

    Err(Error::OutOfSpace {
        required: core::cmp::min(name_len, 1) + HEADER_SIZE,
        available,
    })
}

fn set_name<B, F>(buffer: &mut B, name: &[u8], reserved_overhead: usize, boundary: F) -> Result<NameKind, Error>
where
    B: AdBuffer + ?Sized,
    F: Fn(usize) -> usize,
{
    let existing = ExistingNames::locate(buffer);

    let unused = unused_len(buffer);

    let free = buffer.tail_len() + unused + existing.reclaimable();

    let (kind, len) = negotiate(free, name.len(), reserved_overhead, boundary)?;

    truncate_unused(buffer, unused)?;

    existing.remove_from(buffer)?;

    append(buffer, kind.ad_type(), &name[..len])?;

    log_trace!("set {:?} local name ({} bytes)", kind, len);

    Ok(kind)
}

/// Set the local name, falling back to a shortened name
///
/// The complete local name is used if all of `name` fits within the buffer. If it does not fit, a
/// shortened local name containing as many bytes of `name` as will fit is used instead. The space
/// of any existing local name record (complete or shortened) counts towards the space available
/// because that record is replaced. `reserved_overhead` is the number of bytes of the tail that
/// cannot be used for the name.
///
/// The return is the kind of name record that was written.
///
/// # Error
/// [`Error::OutOfSpace`] is returned if there is not enough space for even one byte of the name.
/// The buffer is not changed.
pub fn set_name_with_fallback<B>(buffer: &mut B, name: &[u8], reserved_overhead: usize) -> Result<NameKind, Error>
where
    B: AdBuffer + ?Sized,
{
    set_name(buffer, name, reserved_overhead, |len| len)
}

/// Set the local name from a string, falling back to a shortened name
///
/// This is the same as [`set_name_with_fallback`] except that a shortened name is always cut at a
/// UTF-8 character boundary so that the name within the advertising data is still valid UTF-8.
///
/// # Error
/// [`Error::OutOfSpace`] is returned if there is not enough space for the first character of the
/// name. The buffer is not changed.
pub fn set_name_str<B>(buffer: &mut B, name: &str, reserved_overhead: usize) -> Result<NameKind, Error>
where
    B: AdBuffer + ?Sized,
{
    set_name(buffer, name.as_bytes(), reserved_overhead, |mut len| {
        while !name.is_char_boundary(len) {
            len -= 1;
        }

        len
    })
}

/// Get the local name within the buffer
///
/// # Error
/// [`Error::NotFound`] is returned if there is no local name record
pub fn get_name<B>(buffer: &B) -> Result<(NameKind, &[u8]), Error>
where
    B: AdBuffer + ?Sized,
{
    let buffer: &[u8] = buffer;

    Records::new(buffer)
        .find_map(|record| NameKind::from_ad_type(record.ad_type()).map(|kind| (kind, record.value())))
        .ok_or(Error::NotFound)
}

/// Remove the local name
///
/// # Error
/// [`Error::NotFound`] is returned if there is no local name record
pub fn clear_name<B>(buffer: &mut B) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    let existing = ExistingNames::locate(buffer);

    if existing.complete.is_none() && existing.shortened.is_none() {
        return Err(Error::NotFound);
    }

    existing.remove_from(buffer)
}
