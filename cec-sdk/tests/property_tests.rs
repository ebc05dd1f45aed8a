//! Property-based tests for the frame codec.
//!
//! The codec's contract is a pair of round-trip laws: structured frames
//! survive a format/parse cycle bit-exactly, and wire text survives a
//! parse/format cycle up to separator and case normalization.

use proptest::prelude::*;

use cec_sdk::{codec, Command, LogicalAddress, Opcode, MAX_PARAMETERS};

/// Strategy for any logical address.
fn address_strategy() -> impl Strategy<Value = LogicalAddress> {
    (0u8..16).prop_map(LogicalAddress::from_nibble)
}

/// Strategy for commands built through the public constructors: polls,
/// bare opcodes, and opcodes with up to the frame limit of parameters.
fn command_strategy() -> impl Strategy<Value = Command> {
    (
        address_strategy(),
        address_strategy(),
        proptest::option::of((
            any::<u8>(),
            proptest::collection::vec(any::<u8>(), 0..=MAX_PARAMETERS),
        )),
    )
        .prop_map(|(initiator, destination, body)| match body {
            None => Command::poll(initiator, destination),
            Some((opcode, parameters)) => {
                Command::with_parameters(initiator, destination, Opcode(opcode), parameters)
                    .expect("strategy respects the parameter limit")
            }
        })
}

/// Strategy for wire text in the accepted grammar: 1-16 hex byte pairs
/// with a random separator and random digit case.
fn wire_text_strategy() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(any::<u8>(), 1..=(2 + MAX_PARAMETERS)),
        proptest::sample::select(vec![":", "-", "_", " "]),
        any::<bool>(),
    )
        .prop_map(|(bytes, separator, lowercase)| {
            let pairs: Vec<String> = bytes
                .iter()
                .map(|byte| {
                    if lowercase {
                        format!("{byte:02x}")
                    } else {
                        format!("{byte:02X}")
                    }
                })
                .collect();
            pairs.join(separator)
        })
}

/// What the codec should emit for a given input: separators gone, digits
/// uppercased, pairs joined with `:`.
fn canonicalize(wire: &str) -> String {
    let digits: Vec<char> = wire
        .chars()
        .filter(|c| ![':', '-', '_', ' '].contains(c))
        .collect();
    digits
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().to_uppercase())
        .collect::<Vec<_>>()
        .join(":")
}

proptest! {
    /// For all valid commands with at most 14 parameter bytes,
    /// `parse(format(c)) == c`.
    #[test]
    fn structured_round_trip_is_identity(command in command_strategy()) {
        let wire = codec::format(&command);
        let reparsed = codec::parse(&wire).expect("formatted output must parse");
        prop_assert_eq!(reparsed, command);
    }

    /// For all wire strings in the accepted grammar, `format(parse(s))`
    /// equals `s` with separators normalized and digits uppercased.
    #[test]
    fn wire_round_trip_canonicalizes(wire in wire_text_strategy()) {
        let command = codec::parse(&wire).expect("grammar strategy emits valid wire text");
        prop_assert_eq!(codec::format(&command), canonicalize(&wire));
    }

    /// Formatted output always matches the canonical grammar.
    #[test]
    fn formatted_output_is_canonical(command in command_strategy()) {
        let wire = codec::format(&command);
        prop_assert!(wire.chars().all(|c| c.is_ascii_hexdigit() || c == ':'));
        prop_assert!(!wire.chars().any(|c| c.is_ascii_lowercase()));
    }

    /// Parsing never panics on arbitrary input strings.
    #[test]
    fn parse_is_total(input in ".{0,64}") {
        let _ = codec::parse(&input);
    }
}
