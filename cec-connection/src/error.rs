//! Error types for connection lifecycle and control operations.

use cec_adapter::DriverError;
use cec_event_manager::DispatchError;
use cec_protocol::{CodecError, LogicalAddress};
use thiserror::Error;

use crate::lifecycle::LifecycleState;

/// Errors surfaced by [`Connection`](crate::Connection) operations.
///
/// Lifecycle errors (`InitializationFailed`, `NoAdapterFound`,
/// `OpenFailed`) are fatal to the connection attempt; per-operation errors
/// wrap the driver's failure and have no other side effect. Nothing in
/// this layer retries.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The driver could not create a bus handle.
    #[error("failed to initialise CEC connection")]
    InitializationFailed(#[source] DriverError),

    /// Adapter enumeration produced no usable candidate.
    #[error("no adapter found matching {hint:?}")]
    NoAdapterFound { hint: String },

    /// The adapter rejected the open request.
    #[error("failed to open adapter {comm:?}")]
    OpenFailed {
        comm: String,
        #[source]
        source: DriverError,
    },

    /// The operation is not legal in the connection's current state.
    #[error("{operation} requires state {required}, connection is {actual}")]
    InvalidState {
        operation: &'static str,
        required: LifecycleState,
        actual: LifecycleState,
    },

    /// Outgoing wire text did not decode to a frame.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The dispatcher configuration was rejected.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("transmit failed")]
    TransmitFailed(#[source] DriverError),

    #[error("power on failed for {address}")]
    PowerOnFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },

    #[error("standby failed for {address}")]
    StandbyFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },

    #[error("volume up failed")]
    VolumeUpFailed(#[source] DriverError),

    #[error("volume down failed")]
    VolumeDownFailed(#[source] DriverError),

    #[error("mute failed")]
    MuteFailed(#[source] DriverError),

    #[error("key press failed for {address}")]
    KeyPressFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },

    #[error("key release failed for {address}")]
    KeyReleaseFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },

    #[error("set active source failed")]
    SetActiveSourceFailed(#[source] DriverError),

    #[error("set OSD string failed for {address}")]
    SetOsdStringFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },

    #[error("device rescan failed")]
    RescanFailed(#[source] DriverError),

    #[error("poll failed for {address}")]
    PollFailed {
        address: LogicalAddress,
        #[source]
        source: DriverError,
    },
}

/// Result type for connection operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;
