//! Frame opcodes and names for the well-known subset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A frame opcode byte.
///
/// Zero is a legitimate opcode (`FeatureAbort`), which is why [`Command`]
/// carries `Option<Opcode>` rather than treating zero as "unset".
///
/// [`Command`]: crate::Command
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode(pub u8);

impl Opcode {
    pub const FEATURE_ABORT: Opcode = Opcode(0x00);
    pub const IMAGE_VIEW_ON: Opcode = Opcode(0x04);
    pub const TEXT_VIEW_ON: Opcode = Opcode(0x0D);
    pub const STANDBY: Opcode = Opcode(0x36);
    pub const USER_CONTROL_PRESSED: Opcode = Opcode(0x44);
    pub const USER_CONTROL_RELEASED: Opcode = Opcode(0x45);
    pub const GIVE_OSD_NAME: Opcode = Opcode(0x46);
    pub const SET_OSD_NAME: Opcode = Opcode(0x47);
    pub const SET_OSD_STRING: Opcode = Opcode(0x64);
    pub const ROUTING_CHANGE: Opcode = Opcode(0x80);
    pub const ACTIVE_SOURCE: Opcode = Opcode(0x82);
    pub const GIVE_PHYSICAL_ADDRESS: Opcode = Opcode(0x83);
    pub const REPORT_PHYSICAL_ADDRESS: Opcode = Opcode(0x84);
    pub const REQUEST_ACTIVE_SOURCE: Opcode = Opcode(0x85);
    pub const SET_STREAM_PATH: Opcode = Opcode(0x86);
    pub const DEVICE_VENDOR_ID: Opcode = Opcode(0x87);
    pub const VENDOR_COMMAND: Opcode = Opcode(0x89);
    pub const GIVE_DEVICE_VENDOR_ID: Opcode = Opcode(0x8C);
    pub const MENU_REQUEST: Opcode = Opcode(0x8D);
    pub const MENU_STATUS: Opcode = Opcode(0x8E);
    pub const GIVE_DEVICE_POWER_STATUS: Opcode = Opcode(0x8F);
    pub const REPORT_POWER_STATUS: Opcode = Opcode(0x90);
    pub const CEC_VERSION: Opcode = Opcode(0x9E);
    pub const GET_CEC_VERSION: Opcode = Opcode(0x9F);
    pub const ABORT: Opcode = Opcode(0xFF);

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Human-readable operation name for the well-known subset.
    ///
    /// Vendor-specific and uncommon opcodes return `None`; the full opcode
    /// catalogue is out of scope for this layer.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0x00 => Some("FeatureAbort"),
            0x04 => Some("ImageViewOn"),
            0x0D => Some("TextViewOn"),
            0x36 => Some("Standby"),
            0x44 => Some("UserControlPressed"),
            0x45 => Some("UserControlReleased"),
            0x46 => Some("GiveOsdName"),
            0x47 => Some("SetOsdName"),
            0x64 => Some("SetOsdString"),
            0x80 => Some("RoutingChange"),
            0x82 => Some("ActiveSource"),
            0x83 => Some("GivePhysicalAddress"),
            0x84 => Some("ReportPhysicalAddress"),
            0x85 => Some("RequestActiveSource"),
            0x86 => Some("SetStreamPath"),
            0x87 => Some("DeviceVendorId"),
            0x89 => Some("VendorCommand"),
            0x8C => Some("GiveDeviceVendorId"),
            0x8D => Some("MenuRequest"),
            0x8E => Some("MenuStatus"),
            0x8F => Some("GiveDevicePowerStatus"),
            0x90 => Some("ReportPowerStatus"),
            0x9E => Some("CecVersion"),
            0x9F => Some("GetCecVersion"),
            0xFF => Some("Abort"),
            _ => None,
        }
    }
}

impl From<u8> for Opcode {
    fn from(raw: u8) -> Self {
        Opcode(raw)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Opcode(0x{:02X} {name})", self.0),
            None => write!(f, "Opcode(0x{:02X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_opcodes_resolve_names() {
        assert_eq!(Opcode::IMAGE_VIEW_ON.name(), Some("ImageViewOn"));
        assert_eq!(Opcode::STANDBY.name(), Some("Standby"));
        assert_eq!(Opcode(0x00).name(), Some("FeatureAbort"));
    }

    #[test]
    fn vendor_opcodes_have_no_name() {
        assert_eq!(Opcode(0xA7).name(), None);
    }

    #[test]
    fn debug_includes_hex_and_name() {
        assert_eq!(format!("{:?}", Opcode(0x44)), "Opcode(0x44 UserControlPressed)");
        assert_eq!(format!("{:?}", Opcode(0xA7)), "Opcode(0xA7)");
    }
}
