//! Connection lifecycle states and legal transitions.

use std::fmt;

/// Where a connection is in its life.
///
/// The forward path is `Unconfigured → Initialized → AdapterFound → Opened
/// → Active`; `Destroyed` is terminal and reachable from every state via
/// explicit teardown. No transition is possible out of `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No bus handle exists yet.
    Unconfigured,
    /// A handle was created and the event sink registered.
    Initialized,
    /// An adapter was selected by discovery.
    AdapterFound,
    /// The adapter accepted the open request.
    Opened,
    /// The connection is live and accepting control operations.
    Active,
    /// The handle was released; the connection is unusable.
    Destroyed,
}

impl LifecycleState {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_advance_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        match (self, next) {
            (_, Destroyed) => self != Destroyed,
            (Unconfigured, Initialized) => true,
            (Initialized, AdapterFound) => true,
            // Re-discovery with a different hint is allowed before opening.
            (AdapterFound, AdapterFound) => true,
            (AdapterFound, Opened) => true,
            (Opened, Active) => true,
            _ => false,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LifecycleState::Unconfigured => "unconfigured",
            LifecycleState::Initialized => "initialized",
            LifecycleState::AdapterFound => "adapter-found",
            LifecycleState::Opened => "opened",
            LifecycleState::Active => "active",
            LifecycleState::Destroyed => "destroyed",
        };
        f.write_str(text)
    }
}
