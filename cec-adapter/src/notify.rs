//! Raw notification payloads and the sink a driver delivers them to.

/// Severity of a driver log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Notice,
    Traffic,
    Debug,
}

/// A diagnostic message emitted by the driver stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

/// A key-press edge reported by a remote device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyPress {
    /// User-control code.
    pub code: u8,
    /// Hold duration in milliseconds; zero for the press edge itself.
    pub duration_ms: u32,
}

/// An undecoded inbound frame, exactly as the driver saw it on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Initiator slot, low 4 bits significant.
    pub initiator: u8,
    /// Destination slot, low 4 bits significant.
    pub destination: u8,
    pub ack: bool,
    pub eom: bool,
    /// `None` for address-only poll frames.
    pub opcode: Option<u8>,
    pub parameters: Vec<u8>,
    pub transmit_timeout_ms: u32,
}

/// Kind of fault the driver is alerting about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    ServiceDevice,
    ConnectionLost,
    PermissionError,
    PortBusy,
    PhysicalAddressError,
    TvPollFailed,
}

/// An asynchronous fault notification from the driver stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    /// Free-form detail the driver attached, when any.
    pub detail: Option<String>,
}

/// Menu overlay state reported by a device.
///
/// The wire convention is inverted relative to intuition: raw value `0`
/// means the menu was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Activated,
    Deactivated,
}

impl MenuState {
    /// Decode the raw wire value.
    pub const fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            MenuState::Activated
        } else {
            MenuState::Deactivated
        }
    }

    pub const fn is_activated(self) -> bool {
        matches!(self, MenuState::Activated)
    }
}

/// Where a driver delivers its asynchronous notifications.
///
/// One sink is registered per bus handle at initialization time, passed as
/// an explicit per-connection context; drivers must not route notifications
/// through shared module state. Calls arrive on a thread the driver
/// controls, possibly concurrently, so implementations must be `Send +
/// Sync` and must not block.
pub trait EventSink: Send + Sync {
    /// A diagnostic message from the driver stack.
    fn log_message(&self, message: LogMessage);

    /// A remote key press or release edge.
    fn key_press(&self, press: RawKeyPress);

    /// A complete inbound frame.
    fn command_received(&self, frame: RawFrame);

    /// A fault notification. Delivery is informational; the driver does not
    /// expect the sink to repair the connection.
    fn alert(&self, alert: Alert);

    /// A device claimed or released the active-source role.
    fn source_activated(&self, address: u8, activated: bool);

    /// The menu overlay state of a device changed. Returns `true` when the
    /// notification was handled.
    fn menu_state_changed(&self, state: MenuState) -> bool;
}
