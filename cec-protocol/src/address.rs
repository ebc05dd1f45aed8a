//! Logical bus addresses and the address/name registry tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::strip_separators;
use crate::error::RegistryError;

/// A 4-bit participant address on the control bus.
///
/// The CEC specification reserves a fixed role for every slot; slot 15 is the
/// broadcast address used to reach all devices at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum LogicalAddress {
    Tv = 0,
    Recording = 1,
    Recording2 = 2,
    Tuner = 3,
    Playback = 4,
    Audio = 5,
    Tuner2 = 6,
    Tuner3 = 7,
    Playback2 = 8,
    Recording3 = 9,
    Tuner4 = 10,
    Playback3 = 11,
    Reserved = 12,
    Reserved2 = 13,
    Free = 14,
    Broadcast = 15,
}

/// Display names indexed by logical address.
const LOGICAL_NAMES: [&str; 16] = [
    "TV",
    "Recording",
    "Recording2",
    "Tuner",
    "Playback",
    "Audio",
    "Tuner2",
    "Tuner3",
    "Playback2",
    "Recording3",
    "Tuner4",
    "Playback3",
    "Reserved",
    "Reserved2",
    "Free",
    "Broadcast",
];

impl LogicalAddress {
    /// All sixteen addresses in slot order.
    pub const ALL: [LogicalAddress; 16] = [
        LogicalAddress::Tv,
        LogicalAddress::Recording,
        LogicalAddress::Recording2,
        LogicalAddress::Tuner,
        LogicalAddress::Playback,
        LogicalAddress::Audio,
        LogicalAddress::Tuner2,
        LogicalAddress::Tuner3,
        LogicalAddress::Playback2,
        LogicalAddress::Recording3,
        LogicalAddress::Tuner4,
        LogicalAddress::Playback3,
        LogicalAddress::Reserved,
        LogicalAddress::Reserved2,
        LogicalAddress::Free,
        LogicalAddress::Broadcast,
    ];

    /// Build an address from the low 4 bits of a byte.
    ///
    /// Infallible by construction; use this for nibbles extracted from wire
    /// frames, and `TryFrom<u8>` for untrusted full-range integers.
    pub const fn from_nibble(raw: u8) -> Self {
        Self::ALL[(raw & 0x0F) as usize]
    }

    /// The raw 4-bit slot number.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// The display name of the device role bound to this slot.
    pub const fn name(self) -> &'static str {
        LOGICAL_NAMES[self as usize]
    }

    /// Resolve a display name back to its address.
    ///
    /// Separators (`:`, `-`, `_`, space) are stripped before matching, and a
    /// single trailing literal `1` is removed so that secondary-device
    /// spellings like `"Tuner1"` resolve to the base slot.
    ///
    /// The literal name `"Unregistered"` resolves to address 15 even though
    /// the forward mapping names that slot `"Broadcast"`. Slot 15 does
    /// double duty on the bus (broadcast destination, unregistered
    /// initiator) and the alias is kept as-is.
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        let mut normalized = strip_separators(name);
        if normalized.len() > 1 && normalized.ends_with('1') {
            normalized.pop();
        }

        for address in Self::ALL {
            if address.name() == normalized {
                return Ok(address);
            }
        }

        if normalized == "Unregistered" {
            return Ok(LogicalAddress::Broadcast);
        }

        Err(RegistryError::UnknownDeviceName(name.to_string()))
    }
}

impl TryFrom<u8> for LogicalAddress {
    type Error = RegistryError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > 15 {
            return Err(RegistryError::InvalidAddress(raw));
        }
        Ok(Self::from_nibble(raw))
    }
}

impl From<LogicalAddress> for u8 {
    fn from(address: LogicalAddress) -> u8 {
        address.to_u8()
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the display name bound to a raw address value.
///
/// Fails with [`RegistryError::InvalidAddress`] outside 0-15.
pub fn name_of(address: u8) -> Result<&'static str, RegistryError> {
    LogicalAddress::try_from(address).map(LogicalAddress::name)
}

/// Resolve a display name to its logical address.
///
/// See [`LogicalAddress::from_name`] for the normalization rules.
pub fn address_of(name: &str) -> Result<LogicalAddress, RegistryError> {
    LogicalAddress::from_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookup_matches_reserved_table() {
        assert_eq!(name_of(0).unwrap(), "TV");
        assert_eq!(name_of(4).unwrap(), "Playback");
        assert_eq!(name_of(5).unwrap(), "Audio");
        assert_eq!(name_of(14).unwrap(), "Free");
        assert_eq!(name_of(15).unwrap(), "Broadcast");
    }

    #[test]
    fn forward_lookup_rejects_out_of_range() {
        assert_eq!(name_of(16), Err(RegistryError::InvalidAddress(16)));
        assert_eq!(name_of(255), Err(RegistryError::InvalidAddress(255)));
    }

    #[test]
    fn reverse_lookup_resolves_known_names() {
        assert_eq!(address_of("TV").unwrap(), LogicalAddress::Tv);
        assert_eq!(address_of("Playback2").unwrap(), LogicalAddress::Playback2);
        assert_eq!(address_of("Audio").unwrap(), LogicalAddress::Audio);
    }

    #[test]
    fn reverse_lookup_strips_separators() {
        assert_eq!(address_of("Play back-2").unwrap(), LogicalAddress::Playback2);
    }

    #[test]
    fn reverse_lookup_drops_trailing_one_suffix() {
        assert_eq!(address_of("Tuner1").unwrap(), LogicalAddress::Tuner);
        assert_eq!(address_of("Recording1").unwrap(), LogicalAddress::Recording);
    }

    #[test]
    fn unregistered_aliases_to_broadcast_slot() {
        // Slot 15 answers to both spellings; the forward name stays "Broadcast".
        assert_eq!(address_of("Unregistered").unwrap(), LogicalAddress::Broadcast);
        assert_eq!(address_of("Unregistered").unwrap().to_u8(), 15);
        assert_eq!(LogicalAddress::Broadcast.name(), "Broadcast");
    }

    #[test]
    fn reverse_lookup_rejects_unknown_names() {
        assert!(matches!(
            address_of("Toaster"),
            Err(RegistryError::UnknownDeviceName(_))
        ));
    }

    #[test]
    fn forward_and_reverse_agree_for_every_slot() {
        for address in LogicalAddress::ALL {
            // Free/Unregistered is the one documented alias ambiguity.
            if address == LogicalAddress::Broadcast {
                continue;
            }
            assert_eq!(address_of(address.name()).unwrap(), address);
        }
    }

    #[test]
    fn nibble_constructor_masks_high_bits() {
        assert_eq!(LogicalAddress::from_nibble(0xF4), LogicalAddress::Playback);
        assert_eq!(LogicalAddress::from_nibble(0x0F), LogicalAddress::Broadcast);
    }
}
