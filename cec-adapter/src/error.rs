//! Error type for adapter driver calls.

use thiserror::Error;

/// Failures reported by a concrete adapter driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver could not create a bus handle.
    #[error("failed to initialise bus handle: {0}")]
    InitFailed(String),

    /// A bus call completed but the adapter acknowledged it negatively.
    #[error("bus call returned a failure acknowledgement")]
    Nack,

    /// The adapter hardware could not be reached.
    #[error("adapter transport error: {0}")]
    Transport(String),

    /// The handle was used after teardown.
    #[error("bus handle already destroyed")]
    HandleDestroyed,
}
