//! Configuration handed to a driver when a bus handle is requested.

use cec_protocol::{DeviceType, LogicalAddress, VendorId};

/// The bus limits on-screen-display names to 13 bytes; longer names are
/// truncated at a character boundary before registration.
pub const MAX_DEVICE_NAME_BYTES: usize = 13;

/// Registration parameters for a new bus handle.
///
/// The defaults declare a recording device attached below the TV, the
/// shape most adapter sticks present themselves as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleConfig {
    /// OSD name announced on the bus, at most [`MAX_DEVICE_NAME_BYTES`] bytes.
    pub device_name: String,
    /// Device type declared during registration.
    pub device_type: DeviceType,
    /// The device this connection is physically attached to.
    pub base_device: LogicalAddress,
    /// Vendor id to present when the TV asks; some TVs only talk to
    /// vendors they recognise.
    pub tv_vendor: VendorId,
    /// Whether to claim the active-source role immediately after opening.
    pub activate_source: bool,
}

impl HandleConfig {
    /// A configuration with the given OSD name and default declarations.
    pub fn new(device_name: &str) -> Self {
        let mut name = device_name.to_string();
        while name.len() > MAX_DEVICE_NAME_BYTES {
            name.pop();
        }
        Self {
            device_name: name,
            ..Self::default()
        }
    }
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            device_name: "cec-sdk".to_string(),
            device_type: DeviceType::RecordingDevice,
            base_device: LogicalAddress::Tv,
            tv_vendor: VendorId::SAMSUNG,
            activate_source: false,
        }
    }
}
