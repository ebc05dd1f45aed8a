//! Device roster assembly from live bus queries.

use std::collections::HashMap;

use cec_protocol::{LogicalAddress, PhysicalAddress, PowerStatus, VendorId};
use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::error::Result;

/// Snapshot of one bus participant at query time.
///
/// Assembled on demand by [`Connection::list_active`] and not cached;
/// fields answer "what did the device say just now". Per-field queries are
/// best-effort: a device that ignores one request yields `None` (or
/// [`PowerStatus::Unknown`]) for that field while the rest of the snapshot
/// stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub logical_address: LogicalAddress,
    /// Whether this device currently drives the shared output.
    pub active_source: bool,
    pub power_status: PowerStatus,
    pub vendor_id: Option<VendorId>,
    pub physical_address: Option<PhysicalAddress>,
    /// Name the device reports about itself, at most 13 bytes.
    pub osd_name: Option<String>,
}

impl Connection {
    /// Query the bus for all devices that currently answer.
    ///
    /// Fetches the 16-slot active-device bitmap, then one snapshot per
    /// active slot, keyed by the slot's display name. Aggregation is
    /// best-effort rather than transactional: a device that fails one
    /// field query still appears, with that field degraded to its unknown
    /// value.
    pub fn list_active(&self) -> Result<HashMap<String, Device>> {
        self.with_handle("list_active", |handle| {
            let bitmap = handle.active_devices();
            let mut devices = HashMap::new();
            for (slot, &active) in bitmap.iter().enumerate() {
                if !active {
                    continue;
                }
                let address = LogicalAddress::from_nibble(slot as u8);
                let device = Device {
                    logical_address: address,
                    active_source: handle.is_active_source(address),
                    power_status: handle.device_power_status(address),
                    vendor_id: handle.device_vendor_id(address).ok(),
                    physical_address: handle.device_physical_address(address).ok(),
                    osd_name: handle.device_osd_name(address).ok(),
                };
                tracing::debug!(
                    address = %address,
                    power = %device.power_status,
                    "device snapshot"
                );
                devices.insert(address.name().to_string(), device);
            }
            devices
        })
    }
}
