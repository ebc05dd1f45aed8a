//! CEC protocol data model and frame codec.
//!
//! This crate defines the pure, I/O-free core of the cec-sdk workspace:
//! logical and physical bus addresses, the [`Command`] frame structure, and
//! the bidirectional codec between frames and their colon-delimited
//! hexadecimal wire text (e.g. `"40:04"` = initiator 4, destination 0,
//! opcode `0x04`).
//!
//! # Quick Start
//!
//! ```
//! use cec_protocol::{Command, LogicalAddress};
//!
//! let command: Command = "40:04".parse()?;
//! assert_eq!(command.initiator, LogicalAddress::Playback);
//! assert_eq!(command.destination, LogicalAddress::Tv);
//! assert_eq!(command.to_string(), "40:04");
//! # Ok::<(), cec_protocol::CodecError>(())
//! ```

mod address;
pub mod codec;
mod command;
mod error;
mod opcode;
mod types;

pub use address::{address_of, name_of, LogicalAddress};
pub use command::{Command, MAX_PARAMETERS};
pub use error::{CodecError, RegistryError};
pub use opcode::Opcode;
pub use types::{
    keycode, DeviceType, KeyPress, PhysicalAddress, PowerStatus, SourceActivation, VendorId,
};
