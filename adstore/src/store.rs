//! Finding, inserting, and removing records
//!
//! These operations keep a buffer as a contiguous sequence of records with at most one record for
//! each AD type. Every check for space is done before the buffer is changed, so an operation that
//! returns an [`Error`] (other than [`Error::Internal`]) leaves the buffer untouched.
//!
//! All changes to a buffer go through two primitives. A record is either *appended* at the end of
//! the occupied region, or a located record is *removed* by moving every byte after it to the left
//! and giving the freed bytes back to the tail of the buffer.

use crate::record::{RecordLocation, Records};
use crate::{Error, Inconsistency, InvalidArgument, HEADER_SIZE, MAX_VALUE_LEN};
use adstore_core::buffer::AdBuffer;

/// Find the record with the AD type `ad_type`
///
/// The occupied region of `buffer` is scanned from the start. Scanning stops at the end of the
/// occupied region, at a zero length byte, or at a record whose length runs past the end of the
/// occupied region. Any records past where scanning stopped are treated as absent.
///
/// # Error
/// [`Error::NotFound`] is returned if there is no record of `ad_type`.
pub fn find<B>(buffer: &B, ad_type: u8) -> Result<RecordLocation, Error>
where
    B: AdBuffer + ?Sized,
{
    let location = Records::new(buffer)
        .find(|record| record.ad_type() == ad_type)
        .map(|record| record.location())
        .ok_or(Error::NotFound)?;

    log_trace!("found AD type {:#04X} at offset {}", ad_type, location.offset());

    Ok(location)
}

/// Get the value of the record with the AD type `ad_type`
///
/// # Error
/// [`Error::NotFound`] is returned if there is no record of `ad_type`.
pub fn get<B>(buffer: &B, ad_type: u8) -> Result<&[u8], Error>
where
    B: AdBuffer + ?Sized,
{
    find(buffer, ad_type).map(|location| &buffer[location.value_range()])
}

/// Check if there is a record of AD type `ad_type`
pub fn contains<B>(buffer: &B, ad_type: u8) -> bool
where
    B: AdBuffer + ?Sized,
{
    find(buffer, ad_type).is_ok()
}

/// Remove the record with the AD type `ad_type`
///
/// The bytes after the removed record are moved left to fill the gap, and the occupied length of
/// the buffer shrinks by the full size of the record.
///
/// # Error
/// [`Error::NotFound`] is returned if there is no record of `ad_type`. The buffer is not changed.
pub fn remove<B>(buffer: &mut B, ad_type: u8) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    let location = find(buffer, ad_type)?;

    remove_located(buffer, location)?;

    log_trace!("removed AD type {:#04X} ({} bytes)", ad_type, location.size());

    Ok(())
}

/// Insert a record
///
/// A record with the AD type `ad_type` and the value `value` is appended to the end of the
/// occupied region of `buffer`. If there is already a record with the type `ad_type`, it is
/// removed first. The space of the removed record counts towards the space available for the new
/// record.
///
/// Occupied bytes that a scan would never reach (anything after a zero length byte or after a
/// record whose length runs past the end) are dropped, and the new record is placed directly after
/// the last record. Those bytes count towards the available space.
///
/// # Error
/// * [`Error::InvalidArgument`] if `value` is longer than [`MAX_VALUE_LEN`]
/// * [`Error::OutOfSpace`] if the record does not fit within the buffer
///
/// The buffer is not changed when either of these errors are returned.
pub fn insert<B>(buffer: &mut B, ad_type: u8, value: &[u8]) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    if value.len() > MAX_VALUE_LEN {
        log_error!(
            "value of {} bytes for AD type {:#04X} is too long for a record",
            value.len(),
            ad_type
        );

        return Err(Error::InvalidArgument(InvalidArgument::ValueTooLong { len: value.len() }));
    }

    let required = value.len() + HEADER_SIZE;

    let existing = match find(buffer, ad_type) {
        Ok(location) => Some(location),
        Err(Error::NotFound) => None,
        Err(e) => return Err(e),
    };

    let unused = unused_len(buffer);

    let available = buffer.tail_len() + unused + existing.map(|location| location.size()).unwrap_or_default();

    if required > available {
        log_debug!(
            "no space for AD type {:#04X}, requires {} bytes but {} are available",
            ad_type,
            required,
            available
        );

        return Err(Error::OutOfSpace { required, available });
    }

    truncate_unused(buffer, unused)?;

    if let Some(location) = existing {
        remove_located(buffer, location)?;
    }

    append(buffer, ad_type, value)?;

    log_trace!("inserted AD type {:#04X} ({} bytes)", ad_type, required);

    Ok(())
}

/// Get the number of occupied bytes after the last record
///
/// This is non-zero when the occupied region handed over by a lower layer contains a zero length
/// byte or a record whose length runs past the end. These bytes are never found by a scan.
pub(crate) fn unused_len(buffer: &[u8]) -> usize {
    buffer.len() - Records::new(buffer).map(|record| record.size()).sum::<usize>()
}

/// Give the `unused` bytes after the last record back to the tail
///
/// A record appended afterwards directly follows the last record so a scan will find it.
pub(crate) fn truncate_unused<B>(buffer: &mut B, unused: usize) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    if unused == 0 {
        return Ok(());
    }

    log_debug!("dropping {} bytes after the last record", unused);

    buffer.try_shrink_tail(unused).map_err(|e| {
        log_error!("failed to shrink the buffer past the last record: {}", e);

        Error::Internal(Inconsistency::ShrinkFailed(e))
    })
}

/// Append a record to the end of the occupied region
///
/// The caller must have already checked that there is enough space within the tail.
pub(crate) fn append<B>(buffer: &mut B, ad_type: u8, value: &[u8]) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    debug_assert!(value.len() <= MAX_VALUE_LEN);

    let size = value.len() + HEADER_SIZE;

    let record = buffer.try_grow_tail(size).map_err(|e| {
        log_error!("failed to grow the buffer for AD type {:#04X}: {}", ad_type, e);

        Error::Internal(Inconsistency::GrowFailed(e))
    })?;

    // the length byte counts the AD type and the value
    record[0] = (value.len() + 1) as u8;
    record[1] = ad_type;
    record[HEADER_SIZE..].copy_from_slice(value);

    Ok(())
}

/// Remove a located record
///
/// Everything after the record is moved over it, then the buffer's tail is grown by the size of the
/// record. `location` must be the result of a [`find`] on the unchanged `buffer`.
pub(crate) fn remove_located<B>(buffer: &mut B, location: RecordLocation) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    let range = location.record_range();

    let len = buffer.len();

    buffer.copy_within(range.end..len, range.start);

    buffer.try_shrink_tail(location.size()).map_err(|e| {
        log_error!("failed to shrink the buffer after removing offset {}: {}", location.offset(), e);

        Error::Internal(Inconsistency::ShrinkFailed(e))
    })
}
