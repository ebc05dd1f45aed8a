//! Bidirectional codec between wire text and [`Command`] frames.
//!
//! Wire text is hexadecimal byte pairs separated by `:` (case-insensitive on
//! input, uppercase on output). Input additionally accepts `-`, `_` and
//! space as separators; they are stripped before decoding.
//!
//! Frame layout after separator removal:
//!
//! ```text
//! +----------------+--------+----------------+
//! | initiator/dest | opcode |   parameters   |
//! |  hi/lo nibble  |  1 B   |    0-14 B      |
//! +----------------+--------+----------------+
//! ```
//!
//! Byte 1 and the parameters are optional; a lone address byte is a poll.

use crate::address::LogicalAddress;
use crate::command::{Command, MAX_PARAMETERS};
use crate::error::CodecError;
use crate::opcode::Opcode;

/// Separator characters accepted on input.
pub const SEPARATORS: [char; 4] = [':', '-', '_', ' '];

/// Largest frame: address byte + opcode byte + 14 parameter bytes.
const MAX_FRAME_BYTES: usize = 2 + MAX_PARAMETERS;

/// Remove all accepted separator characters from the input.
pub(crate) fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Decode wire text into a structured frame.
///
/// Fails with [`CodecError::MalformedCommand`] when the input is empty, has
/// an odd number of hex digits, or encodes more than 16 bytes, and with
/// [`CodecError::InvalidHex`] when a digit does not decode.
pub fn parse(input: &str) -> Result<Command, CodecError> {
    let hex = strip_separators(input);
    let digits: Vec<char> = hex.chars().collect();
    if digits.is_empty() {
        return Err(CodecError::MalformedCommand(
            "empty command string".to_string(),
        ));
    }
    if digits.len() % 2 != 0 {
        return Err(CodecError::MalformedCommand(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }
    let byte_count = digits.len() / 2;
    if byte_count > MAX_FRAME_BYTES {
        return Err(CodecError::MalformedCommand(format!(
            "{byte_count} bytes exceeds the {MAX_FRAME_BYTES}-byte frame limit"
        )));
    }

    let mut bytes = Vec::with_capacity(byte_count);
    for pair in digits.chunks_exact(2) {
        let hi = pair[0]
            .to_digit(16)
            .ok_or_else(|| CodecError::InvalidHex(pair.iter().collect()))?;
        let lo = pair[1]
            .to_digit(16)
            .ok_or_else(|| CodecError::InvalidHex(pair.iter().collect()))?;
        bytes.push(((hi << 4) | lo) as u8);
    }

    let mut command = Command::poll(
        LogicalAddress::from_nibble(bytes[0] >> 4),
        LogicalAddress::from_nibble(bytes[0]),
    );
    if bytes.len() > 1 {
        command.opcode = Some(Opcode(bytes[1]));
        command.parameters = bytes[2..].to_vec();
    }
    Ok(command)
}

/// Render a frame as canonical wire text: uppercase hex pairs joined by `:`.
pub fn format(command: &Command) -> String {
    let mut bytes = Vec::with_capacity(2 + command.parameters.len());
    bytes.push((command.initiator.to_u8() << 4) | command.destination.to_u8());
    if let Some(opcode) = command.opcode {
        bytes.push(opcode.raw());
        bytes.extend_from_slice(&command.parameters);
    }
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_address_and_opcode() {
        let command = parse("40:04").unwrap();
        assert_eq!(command.initiator, LogicalAddress::Playback);
        assert_eq!(command.destination, LogicalAddress::Tv);
        assert_eq!(command.opcode, Some(Opcode(0x04)));
        assert!(command.parameters.is_empty());
    }

    #[test]
    fn lone_address_byte_is_a_poll() {
        let command = parse("F0").unwrap();
        assert_eq!(command.initiator, LogicalAddress::Broadcast);
        assert_eq!(command.destination, LogicalAddress::Tv);
        assert!(command.is_poll());
    }

    #[test]
    fn parses_parameter_bytes_in_order() {
        let command = parse("4F:82:10:00").unwrap();
        assert_eq!(command.opcode, Some(Opcode::ACTIVE_SOURCE));
        assert_eq!(command.parameters, vec![0x10, 0x00]);
    }

    #[test]
    fn accepts_every_separator() {
        let canonical = parse("40:04").unwrap();
        for variant in ["40-04", "40_04", "40 04", "4004", "4_0-0 4"] {
            assert_eq!(parse(variant).unwrap(), canonical);
        }
    }

    #[test]
    fn input_case_is_insensitive() {
        assert_eq!(parse("4f:82").unwrap(), parse("4F:82").unwrap());
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(parse(""), Err(CodecError::MalformedCommand(_))));
        assert!(matches!(parse(": -"), Err(CodecError::MalformedCommand(_))));
    }

    #[test]
    fn odd_digit_count_is_malformed() {
        assert!(matches!(parse("4"), Err(CodecError::MalformedCommand(_))));
        assert!(matches!(parse("40:0"), Err(CodecError::MalformedCommand(_))));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        assert!(matches!(parse("4Z"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(parse("40:GG"), Err(CodecError::InvalidHex(_))));
    }

    #[test]
    fn oversized_frames_are_rejected() {
        // 17 bytes: one over the 2 + 14 limit.
        let oversized = "00:".repeat(16) + "00";
        assert!(matches!(
            parse(&oversized),
            Err(CodecError::MalformedCommand(_))
        ));
    }

    #[test]
    fn longest_legal_frame_round_trips() {
        let wire = "40:64:00:01:02:03:04:05:06:07:08:09:0A:0B:0C:0D";
        let command = parse(wire).unwrap();
        assert_eq!(command.parameters.len(), MAX_PARAMETERS);
        assert_eq!(format(&command), wire);
    }

    #[test]
    fn format_uppercases_and_colon_separates() {
        let command = parse("f5:44:41").unwrap();
        assert_eq!(format(&command), "F5:44:41");
    }

    #[test]
    fn format_of_poll_is_single_byte_pair() {
        let command = Command::poll(LogicalAddress::Playback, LogicalAddress::Audio);
        assert_eq!(format(&command), "45");
    }
}
