//! The structured frame type exchanged with the bus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::address::LogicalAddress;
use crate::codec;
use crate::error::CodecError;
use crate::opcode::Opcode;

/// Maximum number of parameter bytes a frame can carry.
pub const MAX_PARAMETERS: usize = 14;

/// Default transmit timeout in milliseconds, matching the adapter stack's
/// standard transmission window.
pub const DEFAULT_TRANSMIT_TIMEOUT_MS: u32 = 1000;

/// One discrete protocol message: addresses, optional opcode, parameters.
///
/// A frame without an opcode is an address-only poll; `opcode: None` encodes
/// that state, so a poll is distinguishable from a frame whose opcode is
/// legitimately `0x00`. Frames are immutable once built and are discarded
/// after handling.
///
/// Parsing and rendering go through [`FromStr`] and [`fmt::Display`]:
///
/// ```
/// use cec_protocol::Command;
///
/// let ping: Command = "F0".parse()?;
/// assert!(ping.is_poll());
/// # Ok::<(), cec_protocol::CodecError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub initiator: LogicalAddress,
    pub destination: LogicalAddress,
    /// Acknowledgement bit reported by the adapter for inbound frames.
    pub ack: bool,
    /// End-of-message bit reported by the adapter for inbound frames.
    pub eom: bool,
    pub opcode: Option<Opcode>,
    /// Ordered parameter bytes, at most [`MAX_PARAMETERS`].
    pub parameters: Vec<u8>,
    pub transmit_timeout_ms: u32,
}

impl Command {
    /// An address-only poll frame.
    pub fn poll(initiator: LogicalAddress, destination: LogicalAddress) -> Self {
        Self {
            initiator,
            destination,
            ack: false,
            eom: false,
            opcode: None,
            parameters: Vec::new(),
            transmit_timeout_ms: DEFAULT_TRANSMIT_TIMEOUT_MS,
        }
    }

    /// A frame with an opcode and no parameters.
    pub fn new(
        initiator: LogicalAddress,
        destination: LogicalAddress,
        opcode: Opcode,
    ) -> Self {
        Self {
            opcode: Some(opcode),
            ..Self::poll(initiator, destination)
        }
    }

    /// A frame with an opcode and parameter bytes.
    ///
    /// Fails with [`CodecError::MalformedCommand`] when more than
    /// [`MAX_PARAMETERS`] bytes are supplied.
    pub fn with_parameters(
        initiator: LogicalAddress,
        destination: LogicalAddress,
        opcode: Opcode,
        parameters: Vec<u8>,
    ) -> Result<Self, CodecError> {
        if parameters.len() > MAX_PARAMETERS {
            return Err(CodecError::MalformedCommand(format!(
                "{} parameter bytes exceeds the frame limit of {MAX_PARAMETERS}",
                parameters.len()
            )));
        }
        Ok(Self {
            opcode: Some(opcode),
            parameters,
            ..Self::poll(initiator, destination)
        })
    }

    /// Whether this is an address-only poll frame.
    pub fn is_poll(&self) -> bool {
        self.opcode.is_none()
    }

    /// Resolved operation name of the opcode, when it is a well-known one.
    pub fn opcode_name(&self) -> Option<&'static str> {
        self.opcode.and_then(Opcode::name)
    }
}

impl FromStr for Command {
    type Err = CodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        codec::parse(text)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_frames_carry_no_opcode() {
        let poll = Command::poll(LogicalAddress::Playback, LogicalAddress::Tv);
        assert!(poll.is_poll());
        assert!(poll.parameters.is_empty());
        assert_eq!(poll.opcode_name(), None);
    }

    #[test]
    fn with_parameters_enforces_frame_limit() {
        let too_many = vec![0u8; MAX_PARAMETERS + 1];
        let result = Command::with_parameters(
            LogicalAddress::Playback,
            LogicalAddress::Tv,
            Opcode::SET_OSD_STRING,
            too_many,
        );
        assert!(matches!(result, Err(CodecError::MalformedCommand(_))));
    }

    #[test]
    fn opcode_name_resolves_for_known_operations() {
        let command = Command::new(
            LogicalAddress::Playback,
            LogicalAddress::Tv,
            Opcode::IMAGE_VIEW_ON,
        );
        assert_eq!(command.opcode_name(), Some("ImageViewOn"));
    }
}
