//! Shared value types for the CEC data model.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::address::LogicalAddress;
use crate::error::CodecError;

/// Power state a device reports about itself.
///
/// `Unknown` doubles as the query-failure value: adapters report it when a
/// device does not answer the power-status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerStatus {
    On,
    Standby,
    /// In transition from standby to on.
    Starting,
    /// In transition from on to standby.
    ShuttingDown,
    #[default]
    Unknown,
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PowerStatus::On => "on",
            PowerStatus::Standby => "standby",
            PowerStatus::Starting => "starting",
            PowerStatus::ShuttingDown => "shutting down",
            PowerStatus::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Device type declared to the bus when a connection registers itself.
///
/// Distinct from [`LogicalAddress`]: the type is what a device *is*, the
/// address is the slot it was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DeviceType {
    Tv = 0,
    RecordingDevice = 1,
    Reserved = 2,
    Tuner = 3,
    PlaybackDevice = 4,
    AudioSystem = 5,
}

/// A 16-bit bus topology identifier, rendered as four dot-separated nibbles
/// (e.g. `"1.0.0.0"` for a device on the first input of the root display).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct PhysicalAddress(u16);

impl PhysicalAddress {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The four path nibbles, most significant first.
    pub const fn nibbles(self) -> [u8; 4] {
        [
            ((self.0 >> 12) & 0xF) as u8,
            ((self.0 >> 8) & 0xF) as u8,
            ((self.0 >> 4) & 0xF) as u8,
            (self.0 & 0xF) as u8,
        ]
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.nibbles();
        write!(f, "{:x}.{:x}.{:x}.{:x}", a, b, c, d)
    }
}

impl FromStr for PhysicalAddress {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut raw: u16 = 0;
        let mut count = 0;
        for part in text.split('.') {
            let nibble = u16::from_str_radix(part, 16)
                .map_err(|_| CodecError::InvalidHex(text.to_string()))?;
            if nibble > 0xF || count == 4 {
                return Err(CodecError::MalformedCommand(format!(
                    "physical address {text:?} is not four hex nibbles"
                )));
            }
            raw = (raw << 4) | nibble;
            count += 1;
        }
        if count != 4 {
            return Err(CodecError::MalformedCommand(format!(
                "physical address {text:?} is not four hex nibbles"
            )));
        }
        Ok(Self(raw))
    }
}

/// A bus vendor identifier; 24 bits in practice, with the top bits zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct VendorId(u64);

impl VendorId {
    pub const SAMSUNG: VendorId = VendorId(0x0000F0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// One edge of a physical or virtual button press on a remote device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    /// User-control code; see the [`keycode`] constants for common values.
    pub code: u8,
    /// How long the key was held before the release was reported.
    pub duration: Duration,
}

/// Notice that a device claimed or gave up the shared display output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceActivation {
    pub address: LogicalAddress,
    /// Display name resolved from the registry table.
    pub name: String,
    /// `true` when the device became the active source, `false` when it
    /// stopped being it.
    pub activated: bool,
}

/// Well-known user-control codes for [`KeyPress::code`].
pub mod keycode {
    pub const SELECT: u8 = 0x00;
    pub const UP: u8 = 0x01;
    pub const DOWN: u8 = 0x02;
    pub const LEFT: u8 = 0x03;
    pub const RIGHT: u8 = 0x04;
    pub const ROOT_MENU: u8 = 0x09;
    pub const EXIT: u8 = 0x0D;
    pub const POWER: u8 = 0x40;
    pub const VOLUME_UP: u8 = 0x41;
    pub const VOLUME_DOWN: u8 = 0x42;
    pub const MUTE: u8 = 0x43;
    pub const PLAY: u8 = 0x44;
    pub const STOP: u8 = 0x45;
    pub const PAUSE: u8 = 0x46;
    pub const REWIND: u8 = 0x48;
    pub const FAST_FORWARD: u8 = 0x49;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_address_renders_dotted_nibbles() {
        assert_eq!(PhysicalAddress::new(0x1000).to_string(), "1.0.0.0");
        assert_eq!(PhysicalAddress::new(0x12AB).to_string(), "1.2.a.b");
        assert_eq!(PhysicalAddress::new(0x0000).to_string(), "0.0.0.0");
    }

    #[test]
    fn physical_address_parses_its_own_rendering() {
        for raw in [0x0000u16, 0x1000, 0x12AB, 0xFFFF] {
            let address = PhysicalAddress::new(raw);
            assert_eq!(address.to_string().parse::<PhysicalAddress>().unwrap(), address);
        }
    }

    #[test]
    fn physical_address_rejects_wrong_shapes() {
        assert!("1.0.0".parse::<PhysicalAddress>().is_err());
        assert!("1.0.0.0.0".parse::<PhysicalAddress>().is_err());
        assert!("1.0.0.g".parse::<PhysicalAddress>().is_err());
        assert!("10.0.0.0".parse::<PhysicalAddress>().is_err());
    }

    #[test]
    fn vendor_id_renders_six_hex_digits() {
        assert_eq!(VendorId::SAMSUNG.to_string(), "0000F0");
        assert_eq!(VendorId::new(0x08001F).to_string(), "08001F");
    }

    #[test]
    fn power_status_display_matches_bus_vocabulary() {
        assert_eq!(PowerStatus::On.to_string(), "on");
        assert_eq!(PowerStatus::ShuttingDown.to_string(), "shutting down");
        assert_eq!(PowerStatus::default(), PowerStatus::Unknown);
    }
}
