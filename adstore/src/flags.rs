//! Advertising Data: Flags
//!
//! The flags record is normally written by the layer that starts advertising, which may be after
//! the rest of the advertising data was assembled. [`FLAGS_RECORD_SIZE`] is the space to reserve
//! for it.

use crate::assigned::AssignedType;
use crate::{store, Error, HEADER_SIZE};
use adstore_core::buffer::AdBuffer;

/// The full size of a flags record
pub const FLAGS_RECORD_SIZE: usize = HEADER_SIZE + 1;

/// The list of Flags defined in the Core Specification Supplement
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum FlagLabel {
    /// LE limited discoverable mode
    LeLimitedDiscoverableMode,
    /// LE general discoverable mode
    LeGeneralDiscoverableMode,
    /// BR/EDR not supported
    BrEdrNotSupported,
    /// The controller supports simultaneous BR/EDR and LE to the same device
    ControllerSupportsSimultaneousLeAndBrEdr,
}

impl FlagLabel {
    fn get_position(&self) -> u8 {
        match *self {
            FlagLabel::LeLimitedDiscoverableMode => 0,
            FlagLabel::LeGeneralDiscoverableMode => 1,
            FlagLabel::BrEdrNotSupported => 2,
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => 3,
        }
    }
}

impl core::fmt::Display for FlagLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            FlagLabel::LeLimitedDiscoverableMode => f.write_str("le limited discoverable mode"),
            FlagLabel::LeGeneralDiscoverableMode => f.write_str("le general discoverable mode"),
            FlagLabel::BrEdrNotSupported => f.write_str("BR/EDR not supported"),
            FlagLabel::ControllerSupportsSimultaneousLeAndBrEdr => {
                f.write_str("this controller is capable of simultaneous LE and BR/EDR to the same device")
            }
        }
    }
}

/// The value of a flags record
///
/// ```
/// # use adstore::flags::{FlagLabel, Flags};
/// let flags = Flags::new()
///     .with(FlagLabel::LeGeneralDiscoverableMode)
///     .with(FlagLabel::BrEdrNotSupported);
///
/// assert_eq!(0x06, flags.bits());
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(u8);

impl Flags {
    /// Create a `Flags` with no flag enabled
    pub const fn new() -> Self {
        Flags(0)
    }

    /// Create a `Flags` from the raw bits of a flags record
    pub const fn from_bits(bits: u8) -> Self {
        Flags(bits)
    }

    /// Get the raw bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Return these flags with the flag for `label` enabled
    pub fn with(mut self, label: FlagLabel) -> Self {
        self.enable(label);
        self
    }

    /// Enable the flag for `label`
    pub fn enable(&mut self, label: FlagLabel) {
        self.0 |= 1 << label.get_position();
    }

    /// Disable the flag for `label`
    pub fn disable(&mut self, label: FlagLabel) {
        self.0 &= !(1 << label.get_position());
    }

    /// Check if the flag for `label` is enabled
    pub fn is_enabled(&self, label: FlagLabel) -> bool {
        self.0 & (1 << label.get_position()) != 0
    }
}

/// Set the flags record
///
/// An existing flags record is replaced.
///
/// # Error
/// [`Error::OutOfSpace`] is returned if there is no room for the flags record
pub fn set_flags<B>(buffer: &mut B, flags: Flags) -> Result<(), Error>
where
    B: AdBuffer + ?Sized,
{
    store::insert(buffer, AssignedType::Flags.val(), &[flags.bits()])
}

/// Get the flags within the buffer
///
/// A flags record with no value is the same as a flags record with every flag disabled.
///
/// # Error
/// [`Error::NotFound`] is returned if there is no flags record
pub fn get_flags<B>(buffer: &B) -> Result<Flags, Error>
where
    B: AdBuffer + ?Sized,
{
    let value = store::get(buffer, AssignedType::Flags.val())?;

    Ok(Flags(value.first().copied().unwrap_or_default()))
}
