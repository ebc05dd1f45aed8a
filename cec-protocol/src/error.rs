//! Error types for the cec-protocol crate.

use thiserror::Error;

/// Errors from parsing or constructing wire-format commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input was empty, had an odd number of hex digits, or encoded more
    /// bytes than a frame can carry.
    #[error("malformed command: {0}")]
    MalformedCommand(String),

    /// A character outside `[0-9A-Fa-f]` survived separator removal.
    #[error("invalid hex in command: {0:?}")]
    InvalidHex(String),
}

/// Errors from logical-address and device-name lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Logical addresses are 4-bit values; anything outside 0-15 is rejected.
    #[error("invalid logical address {0} (valid range is 0-15)")]
    InvalidAddress(u8),

    /// The name did not match any known device role.
    #[error("unknown device name: {0:?}")]
    UnknownDeviceName(String),
}
