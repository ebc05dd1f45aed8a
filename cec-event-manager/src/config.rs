//! Configuration for the event dispatcher queues.

use crate::error::DispatchError;

/// Per-queue capacities for the five consumer queues.
///
/// Capacities bound memory when a consumer stalls; once a queue is full the
/// oldest entry is dropped for each new arrival. The defaults weight the
/// queues by expected traffic: the driver's log stream is by far the
/// chattiest, command traffic is moderate, and source/menu notices are
/// rare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Capacity of the log-message queue.
    /// Default: 512
    pub message_capacity: usize,

    /// Capacity of the key-press queue.
    /// Default: 64
    pub key_press_capacity: usize,

    /// Capacity of the inbound-command queue.
    /// Default: 256
    pub command_capacity: usize,

    /// Capacity of the source-activation queue.
    /// Default: 16
    pub source_capacity: usize,

    /// Capacity of the menu-activation queue.
    /// Default: 16
    pub menu_capacity: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            message_capacity: 512,
            key_press_capacity: 64,
            command_capacity: 256,
            source_capacity: 16,
            menu_capacity: 16,
        }
    }
}

impl DispatcherConfig {
    /// Check that every capacity is usable.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let capacities = [
            ("message_capacity", self.message_capacity),
            ("key_press_capacity", self.key_press_capacity),
            ("command_capacity", self.command_capacity),
            ("source_capacity", self.source_capacity),
            ("menu_capacity", self.menu_capacity),
        ];
        for (name, capacity) in capacities {
            if capacity == 0 {
                return Err(DispatchError::InvalidConfiguration(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DispatcherConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = DispatcherConfig {
            command_capacity: 0,
            ..DispatcherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DispatchError::InvalidConfiguration(_))
        ));
    }
}
