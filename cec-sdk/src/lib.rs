//! # cec-sdk
//!
//! A bridge between a consumer-electronics control bus and application
//! code: raw bus frames become structured events on consumer queues, and
//! high-level intents (power on, volume, key presses) become correctly
//! framed outgoing messages. A live registry reports which devices are on
//! the bus, their addresses, names and power state.
//!
//! The physical transport is behind the [`AdapterDriver`] trait; any
//! driver stack that can send frames and invoke callbacks plugs in.
//!
//! ## Usage
//!
//! ```no_run
//! use cec_sdk::prelude::*;
//! # fn demo(driver: &impl cec_sdk::AdapterDriver) -> Result<(), cec_sdk::ConnectionError> {
//! // Initialize, discover an adapter by name substring, open it:
//! let connection = cec_sdk::connect(driver, "ttyACM", "living-room")?;
//!
//! // Control intents:
//! connection.power_on(LogicalAddress::Tv)?;
//! connection.volume_up()?;
//! connection.key(LogicalAddress::Tv, keycode::PLAY)?;
//!
//! // Who is on the bus?
//! for (name, device) in connection.list_active()? {
//!     println!("{name}: power {}", device.power_status);
//! }
//!
//! // Structured events, decoupled from the driver's callback thread:
//! for command in connection.commands().try_iter() {
//!     println!("bus command: {command}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cec-sdk (facade)
//!     ↓
//! cec-connection (lifecycle, control intents, device roster)
//!     ↓                    ↓
//! cec-event-manager    cec-protocol (frame codec, addresses)
//!     ↓
//! cec-adapter (driver boundary traits)
//! ```

use std::time::Duration;

// Re-export the public surface of the member crates.
pub use cec_adapter::{
    AdapterDriver, AdapterInfo, Alert, AlertKind, BusHandle, DriverError, EventSink,
    HandleConfig, LogLevel, LogMessage, MenuState, RawFrame, RawKeyPress,
    ADAPTER_ENUMERATION_LIMIT, MAX_DEVICE_NAME_BYTES,
};
pub use cec_connection::{
    Connection, ConnectionError, Device, LifecycleState, Result, KEY_SETTLE_DELAY,
};
pub use cec_event_manager::{
    DispatchError, DispatcherConfig, EventDispatcher, EventQueueReader,
};
pub use cec_protocol::{
    address_of, codec, keycode, name_of, CodecError, Command, DeviceType, KeyPress,
    LogicalAddress, Opcode, PhysicalAddress, PowerStatus, RegistryError,
    SourceActivation, VendorId, MAX_PARAMETERS,
};

/// Default adapter connect timeout, matching the adapter stack's standard.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Initialize a connection, discover an adapter by substring hint, and
/// open it with the default timeout.
///
/// Convenience over [`Connection::initialize`],
/// [`Connection::discover_adapter`] and [`Connection::open`]; use those
/// directly when you need a custom timeout or configuration.
pub fn connect<D: AdapterDriver>(
    driver: &D,
    adapter_hint: &str,
    device_name: &str,
) -> Result<Connection> {
    let connection = Connection::initialize(driver, device_name)?;
    let adapter = connection.discover_adapter(adapter_hint)?;
    connection.open(&adapter, DEFAULT_CONNECT_TIMEOUT)?;
    tracing::info!(path = %adapter.path, "CEC connection established");
    Ok(connection)
}

/// Prelude module for convenient imports
///
/// ```
/// use cec_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        connect, keycode, AdapterInfo, Command, Connection, ConnectionError, Device,
        DispatcherConfig, HandleConfig, KeyPress, LifecycleState, LogicalAddress, Opcode,
        PhysicalAddress, PowerStatus, SourceActivation, VendorId,
    };
}
