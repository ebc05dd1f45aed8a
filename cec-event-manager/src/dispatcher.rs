//! The sink implementation that fans driver notifications out to queues.

use std::time::Duration;

use cec_adapter::{
    Alert, EventSink, LogLevel, LogMessage, MenuState, RawFrame, RawKeyPress,
};
use cec_protocol::{
    Command, KeyPress, LogicalAddress, Opcode, SourceActivation, MAX_PARAMETERS,
};

use crate::config::DispatcherConfig;
use crate::error::DispatchError;
use crate::iter::EventQueueReader;
use crate::queue::EventQueue;

/// Receives the driver's notifications and redistributes them to the five
/// consumer queues.
///
/// One dispatcher is registered per connection as that connection's event
/// sink. Handlers do no blocking work: decoding is in-memory and enqueueing
/// is non-blocking by construction, so the driver's callback thread is
/// never stalled by a slow consumer.
pub struct EventDispatcher {
    messages: EventQueue<String>,
    key_presses: EventQueue<KeyPress>,
    commands: EventQueue<Command>,
    source_activations: EventQueue<SourceActivation>,
    menu_activations: EventQueue<bool>,
}

impl EventDispatcher {
    /// Create a dispatcher with default queue capacities.
    pub fn new() -> Result<Self, DispatchError> {
        Self::with_config(DispatcherConfig::default())
    }

    /// Create a dispatcher with explicit queue capacities.
    pub fn with_config(config: DispatcherConfig) -> Result<Self, DispatchError> {
        config.validate()?;
        Ok(Self {
            messages: EventQueue::bounded("messages", config.message_capacity),
            key_presses: EventQueue::bounded("key_presses", config.key_press_capacity),
            commands: EventQueue::bounded("commands", config.command_capacity),
            source_activations: EventQueue::bounded(
                "source_activations",
                config.source_capacity,
            ),
            menu_activations: EventQueue::bounded("menu_activations", config.menu_capacity),
        })
    }

    /// Reader for driver log messages.
    pub fn messages(&self) -> EventQueueReader<String> {
        self.messages.reader()
    }

    /// Reader for remote key presses.
    pub fn key_presses(&self) -> EventQueueReader<KeyPress> {
        self.key_presses.reader()
    }

    /// Reader for decoded inbound commands.
    pub fn commands(&self) -> EventQueueReader<Command> {
        self.commands.reader()
    }

    /// Reader for source activation notices.
    pub fn source_activations(&self) -> EventQueueReader<SourceActivation> {
        self.source_activations.reader()
    }

    /// Reader for menu activation state; `true` means activated.
    pub fn menu_activations(&self) -> EventQueueReader<bool> {
        self.menu_activations.reader()
    }

    /// Total events lost to queue overflow across all five queues.
    pub fn dropped_events(&self) -> u64 {
        self.messages.dropped()
            + self.key_presses.dropped()
            + self.commands.dropped()
            + self.source_activations.dropped()
            + self.menu_activations.dropped()
    }

    fn decode_frame(frame: &RawFrame) -> Command {
        let mut parameters = frame.parameters.clone();
        parameters.truncate(MAX_PARAMETERS);
        Command {
            initiator: LogicalAddress::from_nibble(frame.initiator),
            destination: LogicalAddress::from_nibble(frame.destination),
            ack: frame.ack,
            eom: frame.eom,
            opcode: frame.opcode.map(Opcode),
            parameters,
            transmit_timeout_ms: frame.transmit_timeout_ms,
        }
    }
}

impl EventSink for EventDispatcher {
    fn log_message(&self, message: LogMessage) {
        match message.level {
            LogLevel::Error => tracing::error!(target: "cec_driver", "{}", message.message),
            LogLevel::Warning => tracing::warn!(target: "cec_driver", "{}", message.message),
            LogLevel::Notice => tracing::info!(target: "cec_driver", "{}", message.message),
            LogLevel::Traffic | LogLevel::Debug => {
                tracing::debug!(target: "cec_driver", "{}", message.message)
            }
        }
        self.messages.push(message.message);
    }

    fn key_press(&self, press: RawKeyPress) {
        self.key_presses.push(KeyPress {
            code: press.code,
            duration: Duration::from_millis(u64::from(press.duration_ms)),
        });
    }

    fn command_received(&self, frame: RawFrame) {
        let command = Self::decode_frame(&frame);
        tracing::debug!(command = %command, operation = ?command.opcode_name(), "bus command received");
        self.commands.push(command);
    }

    fn alert(&self, alert: Alert) {
        // TODO: offer a reconnect hook; today an alert only surfaces in the
        // log and the connection stays in its current state.
        tracing::error!(kind = ?alert.kind, detail = ?alert.detail, "bus alert");
    }

    fn source_activated(&self, address: u8, activated: bool) {
        let address = LogicalAddress::from_nibble(address);
        self.source_activations.push(SourceActivation {
            address,
            name: address.name().to_string(),
            activated,
        });
    }

    fn menu_state_changed(&self, state: MenuState) -> bool {
        self.menu_activations.push(state.is_activated());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cec_adapter::AlertKind;

    fn dispatcher() -> EventDispatcher {
        EventDispatcher::new().unwrap()
    }

    fn raw_frame(initiator: u8, destination: u8, opcode: Option<u8>, parameters: Vec<u8>) -> RawFrame {
        RawFrame {
            initiator,
            destination,
            ack: true,
            eom: true,
            opcode,
            parameters,
            transmit_timeout_ms: 1000,
        }
    }

    #[test]
    fn log_messages_reach_the_message_queue() {
        let sink = dispatcher();
        let messages = sink.messages();
        sink.log_message(LogMessage {
            level: LogLevel::Debug,
            message: "TRAFFIC: >> 40:04".to_string(),
        });
        assert_eq!(messages.try_recv().as_deref(), Some("TRAFFIC: >> 40:04"));
    }

    #[test]
    fn key_presses_carry_code_and_duration() {
        let sink = dispatcher();
        let presses = sink.key_presses();
        sink.key_press(RawKeyPress {
            code: cec_protocol::keycode::PLAY,
            duration_ms: 250,
        });
        let press = presses.try_recv().unwrap();
        assert_eq!(press.code, cec_protocol::keycode::PLAY);
        assert_eq!(press.duration, Duration::from_millis(250));
    }

    #[test]
    fn received_frames_decode_to_canonical_commands() {
        let sink = dispatcher();
        let commands = sink.commands();
        sink.command_received(raw_frame(4, 0, Some(0x04), vec![]));
        let command = commands.try_recv().unwrap();
        assert_eq!(command.initiator, LogicalAddress::Playback);
        assert_eq!(command.destination, LogicalAddress::Tv);
        assert_eq!(command.to_string(), "40:04");
        assert_eq!(command.opcode_name(), Some("ImageViewOn"));
    }

    #[test]
    fn poll_frames_decode_without_opcode() {
        let sink = dispatcher();
        let commands = sink.commands();
        sink.command_received(raw_frame(0xF, 0, None, vec![]));
        let command = commands.try_recv().unwrap();
        assert!(command.is_poll());
        assert_eq!(command.to_string(), "F0");
    }

    #[test]
    fn high_address_bits_are_masked_on_decode() {
        let sink = dispatcher();
        let commands = sink.commands();
        sink.command_received(raw_frame(0xF4, 0xF0, Some(0x36), vec![]));
        let command = commands.try_recv().unwrap();
        assert_eq!(command.initiator, LogicalAddress::Playback);
        assert_eq!(command.destination, LogicalAddress::Tv);
    }

    #[test]
    fn alerts_do_not_enter_any_queue() {
        let sink = dispatcher();
        let messages = sink.messages();
        let commands = sink.commands();
        sink.alert(Alert {
            kind: AlertKind::ConnectionLost,
            detail: Some("adapter unplugged".to_string()),
        });
        assert!(messages.try_recv().is_none());
        assert!(commands.try_recv().is_none());
    }

    #[test]
    fn source_activation_resolves_display_name() {
        let sink = dispatcher();
        let activations = sink.source_activations();
        sink.source_activated(4, true);
        let activation = activations.try_recv().unwrap();
        assert_eq!(activation.address, LogicalAddress::Playback);
        assert_eq!(activation.name, "Playback");
        assert!(activation.activated);
    }

    #[test]
    fn menu_state_uses_inverted_wire_polarity() {
        let sink = dispatcher();
        let menu = sink.menu_activations();
        assert!(sink.menu_state_changed(MenuState::from_raw(0)));
        assert!(sink.menu_state_changed(MenuState::from_raw(1)));
        assert_eq!(menu.try_recv(), Some(true));
        assert_eq!(menu.try_recv(), Some(false));
    }

    #[test]
    fn dropped_events_aggregates_across_queues() {
        let sink = EventDispatcher::with_config(DispatcherConfig {
            menu_capacity: 1,
            ..DispatcherConfig::default()
        })
        .unwrap();
        for _ in 0..5 {
            sink.menu_state_changed(MenuState::Activated);
        }
        assert_eq!(sink.dropped_events(), 4);
    }
}
