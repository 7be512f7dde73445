//! Advertising payload configuration
//!
//! A [`PayloadConfig`] describes the records to put into an advertising payload and how to handle
//! the name when it does not fit. With the feature `serde` it can be read from a configuration
//! file.

use crate::flags::{self, Flags, FLAGS_RECORD_SIZE};
use crate::{name, Error, NameKind};
use adstore_core::buffer::AdBuffer;

/// The maximum length of legacy advertising data
pub const LEGACY_MAX_LEN: usize = 31;

/// The maximum length of extended advertising data
pub const EXTENDED_MAX_LEN: usize = 1650;

/// The kind of advertising payload
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayloadKind {
    /// Legacy advertising data or scan response data
    #[default]
    Legacy,
    /// Extended advertising data
    Extended,
}

impl PayloadKind {
    /// Get the maximum length of the payload
    pub const fn max_len(&self) -> usize {
        match self {
            PayloadKind::Legacy => LEGACY_MAX_LEN,
            PayloadKind::Extended => EXTENDED_MAX_LEN,
        }
    }

    /// Create a buffer with the capacity for this kind of payload
    #[cfg(feature = "alloc")]
    pub fn new_buffer(&self) -> adstore_core::buffer::vec::VecBuffer {
        adstore_core::buffer::vec::VecBuffer::with_max_len(self.max_len())
    }
}

/// Configuration for setting the local name
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameConfig {
    /// The number of bytes of the tail to never use for the name
    pub reserved_overhead: usize,
}

impl NameConfig {
    /// Reserve space for a flags record written by a lower layer
    pub const fn reserve_flags() -> Self {
        NameConfig {
            reserved_overhead: FLAGS_RECORD_SIZE,
        }
    }

    /// Set the name using this configuration
    ///
    /// See [`name::set_name_str`]
    pub fn set_name<B>(&self, buffer: &mut B, name: &str) -> Result<NameKind, Error>
    where
        B: AdBuffer + ?Sized,
    {
        name::set_name_str(buffer, name, self.reserved_overhead)
    }
}

/// Configuration of an advertising payload
///
/// ```
/// # use adstore::config::{PayloadConfig, PayloadKind};
/// # use adstore::flags::{FlagLabel, Flags};
/// let config = PayloadConfig {
///     kind: PayloadKind::Legacy,
///     flags: Some(Flags::new().with(FlagLabel::LeGeneralDiscoverableMode)),
///     name: Some("My Device".into()),
///     reserve_flags: false,
/// };
///
/// let mut buffer = config.kind.new_buffer();
///
/// config.apply(&mut buffer).unwrap();
///
/// assert_eq!(&*buffer, &[2, 0x01, 0x02, 10, 0x09, b'M', b'y', b' ', b'D', b'e', b'v', b'i', b'c', b'e']);
/// ```
#[cfg(feature = "alloc")]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadConfig {
    /// The kind of payload
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: PayloadKind,
    /// The flags record to write
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: Option<Flags>,
    /// The device name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<alloc::string::String>,
    /// Reserve space for a flags record written later by a lower layer
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserve_flags: bool,
}

#[cfg(feature = "alloc")]
impl PayloadConfig {
    /// Get the number of bytes reserved when setting the name
    ///
    /// Space for the flags is only reserved when this configuration does not write the flags
    /// itself.
    pub fn reserved_overhead(&self) -> usize {
        if self.reserve_flags && self.flags.is_none() {
            FLAGS_RECORD_SIZE
        } else {
            0
        }
    }

    /// Write this configuration into `buffer`
    ///
    /// The flags record is written first, then the name.
    ///
    /// # Error
    /// An error is returned if either record does not fit. The flags record may already be written
    /// when the name fails.
    pub fn apply<B>(&self, buffer: &mut B) -> Result<(), Error>
    where
        B: AdBuffer + ?Sized,
    {
        if let Some(flags) = self.flags {
            flags::set_flags(buffer, flags)?;
        }

        if let Some(name) = &self.name {
            let name_config = NameConfig {
                reserved_overhead: self.reserved_overhead(),
            };

            name_config.set_name(buffer, name)?;
        }

        Ok(())
    }
}
