//! Error types for the event manager.

use thiserror::Error;

/// Errors that can occur while setting up event dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A queue capacity or other configuration value was invalid.
    #[error("invalid dispatcher configuration: {0}")]
    InvalidConfiguration(String),
}
