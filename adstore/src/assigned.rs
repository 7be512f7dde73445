//! Assigned numbers for AD types
//!
//! The assigned numbers come from the Bluetooth SIG and can be found on the official
//! [Bluetooth](https://www.bluetooth.com/specifications/assigned-numbers/) webpage. Only the AD
//! types commonly placed within advertising data are listed here. The record store itself accepts
//! any AD type as a raw `u8`.

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AssignedType {
    Flags,
    IncompleteListOf16bitServiceClassUUIDs,
    CompleteListOf16bitServiceClassUUIDs,
    IncompleteListOf32bitServiceClassUUIDs,
    CompleteListOf32bitServiceClassUUIDs,
    IncompleteListOf128bitServiceClassUUIDs,
    CompleteListOf128bitServiceClassUUIDs,
    ShortenedLocalName,
    CompleteLocalName,
    TxPowerLevel,
    SlaveConnectionIntervalRange,
    ServiceData16BitUUID,
    Appearance,
    AdvertisingInterval,
    URI,
    ManufacturerSpecificData,
}

impl AssignedType {
    pub const fn val(&self) -> u8 {
        match *self {
            AssignedType::Flags => 0x01,
            AssignedType::IncompleteListOf16bitServiceClassUUIDs => 0x02,
            AssignedType::CompleteListOf16bitServiceClassUUIDs => 0x03,
            AssignedType::IncompleteListOf32bitServiceClassUUIDs => 0x04,
            AssignedType::CompleteListOf32bitServiceClassUUIDs => 0x05,
            AssignedType::IncompleteListOf128bitServiceClassUUIDs => 0x06,
            AssignedType::CompleteListOf128bitServiceClassUUIDs => 0x07,
            AssignedType::ShortenedLocalName => 0x08,
            AssignedType::CompleteLocalName => 0x09,
            AssignedType::TxPowerLevel => 0x0A,
            AssignedType::SlaveConnectionIntervalRange => 0x12,
            AssignedType::ServiceData16BitUUID => 0x16,
            AssignedType::Appearance => 0x19,
            AssignedType::AdvertisingInterval => 0x1A,
            AssignedType::URI => 0x24,
            AssignedType::ManufacturerSpecificData => 0xFF,
        }
    }
}

impl From<AssignedType> for u8 {
    fn from(assigned_type: AssignedType) -> Self {
        assigned_type.val()
    }
}

impl TryFrom<u8> for AssignedType {
    type Error = u8;

    /// Convert from a raw AD type
    ///
    /// The raw value is returned as the error if it is not one of the listed assigned types.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0x01 => Ok(AssignedType::Flags),
            0x02 => Ok(AssignedType::IncompleteListOf16bitServiceClassUUIDs),
            0x03 => Ok(AssignedType::CompleteListOf16bitServiceClassUUIDs),
            0x04 => Ok(AssignedType::IncompleteListOf32bitServiceClassUUIDs),
            0x05 => Ok(AssignedType::CompleteListOf32bitServiceClassUUIDs),
            0x06 => Ok(AssignedType::IncompleteListOf128bitServiceClassUUIDs),
            0x07 => Ok(AssignedType::CompleteListOf128bitServiceClassUUIDs),
            0x08 => Ok(AssignedType::ShortenedLocalName),
            0x09 => Ok(AssignedType::CompleteLocalName),
            0x0A => Ok(AssignedType::TxPowerLevel),
            0x12 => Ok(AssignedType::SlaveConnectionIntervalRange),
            0x16 => Ok(AssignedType::ServiceData16BitUUID),
            0x19 => Ok(AssignedType::Appearance),
            0x1A => Ok(AssignedType::AdvertisingInterval),
            0x24 => Ok(AssignedType::URI),
            0xFF => Ok(AssignedType::ManufacturerSpecificData),
            _ => Err(raw),
        }
    }
}
