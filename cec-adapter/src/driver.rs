//! The driver and bus-handle traits a concrete adapter stack implements.

use std::sync::Arc;
use std::time::Duration;

use cec_protocol::{
    Command, DeviceType, LogicalAddress, PhysicalAddress, PowerStatus, VendorId,
};

use crate::config::HandleConfig;
use crate::error::DriverError;
use crate::notify::EventSink;

/// Upper bound on adapter enumeration; the underlying stacks cap their
/// result buffers at ten entries.
pub const ADAPTER_ENUMERATION_LIMIT: usize = 10;

/// One enumerated adapter: its device path and communication identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterInfo {
    /// Filesystem or bus path of the adapter, e.g. `/dev/ttyACM0`.
    pub path: String,
    /// Communication endpoint identifier used to open the adapter.
    pub comm: String,
}

/// Entry point of a driver stack: hands out bus handles.
///
/// The sink is bound to the handle for its whole lifetime; every
/// asynchronous notification the driver produces for that handle goes to
/// that sink and no other.
pub trait AdapterDriver {
    fn initialize(
        &self,
        config: &HandleConfig,
        sink: Arc<dyn EventSink>,
    ) -> Result<Box<dyn BusHandle>, DriverError>;
}

/// An initialized bus handle.
///
/// Methods take `&mut self`: a handle wraps a single underlying adapter
/// session that is not safe for concurrent use, and the exclusive
/// receiver makes callers serialize access (the connection layer does this
/// with a mutex). Each call blocks until the adapter answers; there is no
/// per-call timeout beyond the one given to [`open`](BusHandle::open).
pub trait BusHandle: Send {
    /// Enumerate available adapters, up to `limit` entries.
    fn find_adapters(&mut self, limit: usize) -> Vec<AdapterInfo>;

    /// Initialize standalone video signaling. Must be called before
    /// [`open`](BusHandle::open).
    fn init_video_standalone(&mut self);

    /// Open the adapter at the given communication endpoint.
    fn open(&mut self, comm: &str, timeout: Duration) -> Result<(), DriverError>;

    /// Put a frame on the wire. Fire-and-forget: a successful return means
    /// the adapter accepted the frame, not that any device acknowledged it.
    fn transmit(&mut self, command: &Command) -> Result<(), DriverError>;

    fn power_on(&mut self, address: LogicalAddress) -> Result<(), DriverError>;

    fn standby(&mut self, address: LogicalAddress) -> Result<(), DriverError>;

    fn volume_up(&mut self) -> Result<(), DriverError>;

    fn volume_down(&mut self) -> Result<(), DriverError>;

    fn mute(&mut self) -> Result<(), DriverError>;

    fn send_key_press(&mut self, address: LogicalAddress, code: u8) -> Result<(), DriverError>;

    fn send_key_release(&mut self, address: LogicalAddress) -> Result<(), DriverError>;

    fn set_active_source(&mut self, device_type: DeviceType) -> Result<(), DriverError>;

    fn set_osd_string(&mut self, address: LogicalAddress, text: &str) -> Result<(), DriverError>;

    /// Ask the adapter to re-probe the bus for devices.
    fn rescan_devices(&mut self) -> Result<(), DriverError>;

    /// Bitmap of bus slots that currently answer, indexed by logical
    /// address.
    fn active_devices(&mut self) -> [bool; 16];

    /// OSD name the device at `address` reports about itself.
    fn device_osd_name(&mut self, address: LogicalAddress) -> Result<String, DriverError>;

    /// Power status of the device at `address`; `Unknown` when the device
    /// does not answer.
    fn device_power_status(&mut self, address: LogicalAddress) -> PowerStatus;

    /// Whether the device at `address` currently drives the shared output.
    fn is_active_source(&mut self, address: LogicalAddress) -> bool;

    fn device_physical_address(
        &mut self,
        address: LogicalAddress,
    ) -> Result<PhysicalAddress, DriverError>;

    fn device_vendor_id(&mut self, address: LogicalAddress) -> Result<VendorId, DriverError>;

    /// Poll the device at `address`; `Ok(true)` when it acknowledged.
    fn poll_device(&mut self, address: LogicalAddress) -> Result<bool, DriverError>;

    /// Release the underlying adapter session. Not idempotent: the handle
    /// must not be used afterwards, and `destroy` must not be called twice.
    fn destroy(&mut self);
}
