//! Connection lifecycle and control operations for the CEC bus.
//!
//! A [`Connection`] owns exactly one bus handle obtained from an
//! [`AdapterDriver`](cec_adapter::AdapterDriver) and walks it through the
//! lifecycle `Initialized → AdapterFound → Opened → Active`. Once active it
//! exposes the control-intent surface (power, volume, keys, OSD, polling),
//! the fire-and-forget [`Connection::transmit`] path, and the live device
//! roster via [`Connection::list_active`].
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use cec_connection::Connection;
//! use cec_protocol::LogicalAddress;
//! # fn demo(driver: &impl cec_adapter::AdapterDriver) -> Result<(), cec_connection::ConnectionError> {
//! let connection = Connection::initialize(driver, "living-room")?;
//! let adapter = connection.discover_adapter("ttyACM")?;
//! connection.open(&adapter, Duration::from_secs(10))?;
//!
//! connection.power_on(LogicalAddress::Tv)?;
//! connection.transmit("40:04")?;
//! # Ok(())
//! # }
//! ```
//!
//! Control operations serialize on the single underlying handle; each one
//! makes a synchronous, blocking driver call with no timeout of its own.
//! Callers that need responsiveness wrap their own timeout around calls
//! into this layer.

mod connection;
mod error;
mod lifecycle;
mod registry;

pub use connection::{Connection, KEY_SETTLE_DELAY};
pub use error::{ConnectionError, Result};
pub use lifecycle::LifecycleState;
pub use registry::Device;
