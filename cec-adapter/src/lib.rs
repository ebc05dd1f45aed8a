//! Driver boundary for CEC bus adapters.
//!
//! This crate defines the contract between the cec-sdk core and whatever
//! concrete adapter stack carries frames to the physical bus: the
//! [`AdapterDriver`]/[`BusHandle`] traits a driver implements, the
//! [`EventSink`] trait through which a driver delivers asynchronous
//! notifications, and the raw payload types those notifications carry.
//!
//! The transport itself (USB, serial, a vendor library) is out of scope;
//! the core treats a driver as a black box that sends frames and invokes
//! callbacks. Notifications arrive on a thread the driver controls, so
//! sink implementations must be thread-safe and must return quickly.

mod config;
mod driver;
mod error;
mod notify;

pub use config::{HandleConfig, MAX_DEVICE_NAME_BYTES};
pub use driver::{AdapterDriver, AdapterInfo, BusHandle, ADAPTER_ENUMERATION_LIMIT};
pub use error::DriverError;
pub use notify::{Alert, AlertKind, EventSink, LogLevel, LogMessage, MenuState, RawFrame, RawKeyPress};
